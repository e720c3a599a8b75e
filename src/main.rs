//! IronCore Admin - gym administration from the terminal
//!
//! This is the main entry point for the ironcore-admin binary.
//! Every command runs once against the configured store and exits.

use std::sync::Arc;

use chrono::{Local, Months};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};

use ironcore_admin::cli::{
    Cli, Commands, ConfigSubcommand, LeadsSubcommand, MemberUpdateArgs, MembersSubcommand,
    NewMemberArgs, PlansSubcommand, TrainersSubcommand,
};
use ironcore_admin::config::{self, AdminConfig};
use ironcore_admin::dashboard::DashboardSummary;
use ironcore_admin::error::{Error, Result};
use ironcore_admin::logging;
use ironcore_admin::session::{ensure_visible, visible_resources, Resource, Session, SessionManager};
use ironcore_admin::storage::{open_store, SharedStore};
use ironcore_admin::store::{DataStore, LeadBoard};
use ironcore_admin::types::{Lead, Member, MemberPatch, NewMember, NewPlan, NewTrainer, Plan, Trainer, User};
use ironcore_admin::version;

fn main() {
    // Parse CLI arguments first (before logging, so we know verbosity)
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprint!("{}", e.format_for_terminal());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    // For commands that don't need the store, use simple setup
    match &cli.command {
        Commands::Version => {
            version::print_version();
            return Ok(());
        }
        Commands::Config { subcommand } => {
            logging::init_simple(tracing::Level::WARN)?;
            return handle_config_command(subcommand.clone(), cli.config.as_deref());
        }
        _ => {}
    }

    let config = AdminConfig::load(cli.config.as_deref())?;

    // The guards must be kept alive for the lifetime of the program
    let _log_guards = logging::init_logging(&config.logging, cli.verbose, cli.quiet)?;

    let build = version::build_info();
    debug!(
        version = %build.full_version(),
        backend = %config.storage.backend,
        data_dir = %config.storage.data_dir,
        "Starting ironcore-admin"
    );

    let storage = open_store(config.backend()?, &config.data_dir());
    let app = App::new(storage, &config, cli.json);

    // Calls are awaited one at a time; a single thread is enough
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Internal(format!("Failed to create runtime: {}", e)))?;

    runtime.block_on(app.execute(cli.command))
}

// ─────────────────────────────────────────────────────────────────
// Application
// ─────────────────────────────────────────────────────────────────

struct App {
    data: DataStore,
    sessions: SessionManager,
    json: bool,
}

impl App {
    fn new(storage: SharedStore, config: &AdminConfig, json: bool) -> Self {
        let latency = config.latency();
        Self {
            data: DataStore::new(Arc::clone(&storage)).with_latency(latency),
            sessions: SessionManager::new(storage).with_latency(latency),
            json,
        }
    }

    async fn execute(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Login { email, password } => {
                let session = self.sessions.login(&email, &password).await?;
                self.emit(&session.user, || {
                    println!(
                        "Logged in as {} ({})",
                        session.user.name, session.user.role
                    )
                })
            }
            Commands::Logout => {
                self.sessions.logout().await?;
                if !self.json {
                    println!("Logged out.");
                }
                Ok(())
            }
            Commands::Whoami => {
                let session = self.session().await?;
                self.emit(&session.user, || print_user(&session.user))
            }
            Commands::Access { role } => {
                let role = match role {
                    Some(role) => role,
                    None => self.session().await?.user.role,
                };
                let resources: Vec<Resource> = visible_resources(role).into_iter().collect();
                self.emit(&resources, || {
                    println!("{} can see:", role);
                    for resource in &resources {
                        println!("  {}", resource);
                    }
                })
            }
            Commands::Dashboard => {
                self.authorize(Resource::Dashboard).await?;
                let summary = DashboardSummary::collect(&self.data).await?;
                self.emit(&summary, || print_summary(&summary))
            }
            Commands::Members { subcommand } => {
                self.authorize(Resource::Members).await?;
                self.members(subcommand).await
            }
            Commands::Trainers { subcommand } => {
                self.authorize(Resource::Trainers).await?;
                self.trainers(subcommand).await
            }
            Commands::Plans { subcommand } => {
                self.authorize(Resource::Payments).await?;
                self.plans(subcommand).await
            }
            Commands::Leads { subcommand } => {
                self.authorize(Resource::Leads).await?;
                self.leads(subcommand).await
            }
            Commands::Version | Commands::Config { .. } => {
                // Already handled before the store was opened
                Err(Error::Internal("command dispatched twice".to_string()))
            }
        }
    }

    async fn session(&self) -> Result<Session> {
        self.sessions.restore().await?.require()
    }

    /// Require a session whose role may see `resource`
    async fn authorize(&self, resource: Resource) -> Result<Session> {
        let session = self.session().await?;
        ensure_visible(session.user.role, resource)?;
        debug!(user = %session.user.name, resource = %resource, "Access granted");
        Ok(session)
    }

    async fn members(&self, subcommand: MembersSubcommand) -> Result<()> {
        let members = self.data.members();
        match subcommand {
            MembersSubcommand::List { search } => {
                let list = match search {
                    Some(term) => members.search(&term).await?,
                    None => members.get_all().await?,
                };
                self.emit(&list, || print_members(&list))
            }
            MembersSubcommand::Add(args) => {
                let member = members.create(new_member(args)).await?;
                self.emit(&member, || println!("Member created: {}", member.id))
            }
            MembersSubcommand::Update { id, fields } => {
                let patch = member_patch(fields);
                if patch.is_empty() {
                    return Err(Error::invalid_input("update", "no fields given"));
                }
                let member = members.update(&id, patch).await?;
                self.emit(&member, || println!("Member updated: {}", member.id))
            }
            MembersSubcommand::Remove { id } => {
                members.delete(&id).await?;
                self.done("Member removed", &id)
            }
        }
    }

    async fn trainers(&self, subcommand: TrainersSubcommand) -> Result<()> {
        let trainers = self.data.trainers();
        match subcommand {
            TrainersSubcommand::List => {
                let list = trainers.get_all().await?;
                self.emit(&list, || print_trainers(&list))
            }
            TrainersSubcommand::Add { name, specialty } => {
                let trainer = trainers.create(NewTrainer { name, specialty }).await?;
                self.emit(&trainer, || println!("Trainer created: {}", trainer.id))
            }
            TrainersSubcommand::Remove { id } => {
                trainers.delete(&id).await?;
                self.done("Trainer removed", &id)
            }
        }
    }

    async fn plans(&self, subcommand: PlansSubcommand) -> Result<()> {
        let plans = self.data.plans();
        match subcommand {
            PlansSubcommand::List => {
                let list = plans.get_all().await?;
                self.emit(&list, || print_plans(&list))
            }
            PlansSubcommand::Add {
                name,
                price,
                duration,
            } => {
                let plan = plans
                    .create(NewPlan {
                        name,
                        price,
                        duration_months: duration,
                    })
                    .await?;
                self.emit(&plan, || println!("Plan created: {}", plan.id))
            }
            PlansSubcommand::Remove { id } => {
                plans.delete(&id).await?;
                self.done("Plan removed", &id)
            }
        }
    }

    async fn leads(&self, subcommand: LeadsSubcommand) -> Result<()> {
        let leads = self.data.leads();
        match subcommand {
            LeadsSubcommand::List { status } => {
                let list = match status {
                    Some(status) => leads.with_status(status).await?,
                    None => leads.get_all().await?,
                };
                self.emit(&list, || print_leads(&list))
            }
            LeadsSubcommand::Board => {
                let board = leads.board().await?;
                self.emit(&board, || print_board(&board))
            }
            LeadsSubcommand::SetStatus { id, status } => {
                let lead = leads.update_status(&id, status).await?;
                info!(id = %lead.id, status = %lead.status, "Lead moved");
                self.emit(&lead, || println!("Lead {} is now {}", lead.id, lead.status))
            }
        }
    }

    /// Print `value` as JSON, or run `human` for table output
    fn emit<T: Serialize>(&self, value: &T, human: impl FnOnce()) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            human();
        }
        Ok(())
    }

    fn done(&self, message: &str, id: &str) -> Result<()> {
        #[derive(Serialize)]
        struct Removed<'a> {
            removed: &'a str,
        }
        self.emit(&Removed { removed: id }, || println!("{}: {}", message, id))
    }
}

// ─────────────────────────────────────────────────────────────────
// Argument Conversion
// ─────────────────────────────────────────────────────────────────

fn new_member(args: NewMemberArgs) -> NewMember {
    let today = Local::now().date_naive();
    NewMember {
        name: args.name,
        email: args.email,
        phone: args.phone,
        status: args.status,
        renewal_date: args
            .renewal_date
            .unwrap_or_else(|| today.checked_add_months(Months::new(1)).unwrap_or(today)),
        plan_id: args.plan_id,
        trainer_id: args.trainer_id,
        last_attendance: args.last_attendance,
    }
}

fn member_patch(args: MemberUpdateArgs) -> MemberPatch {
    MemberPatch {
        name: args.name,
        email: args.email,
        phone: args.phone,
        status: args.status,
        renewal_date: args.renewal_date,
        plan_id: args.plan_id,
        trainer_id: if args.clear_trainer {
            Some(None)
        } else {
            args.trainer_id.map(Some)
        },
        last_attendance: if args.clear_last_attendance {
            Some(None)
        } else {
            args.last_attendance.map(Some)
        },
    }
}

// ─────────────────────────────────────────────────────────────────
// Table Output
// ─────────────────────────────────────────────────────────────────

fn print_user(user: &User) {
    println!("Name:  {}", user.name);
    println!("Email: {}", user.email);
    println!("Role:  {}", user.role);
}

fn print_summary(summary: &DashboardSummary) {
    println!("Total members:  {}", summary.total_members);
    println!("Active members: {}", summary.active_members);
    println!("Total leads:    {}", summary.total_leads);
    for (status, count) in &summary.leads_by_status {
        println!("  {:<10} {}", status, count);
    }
}

fn print_members(members: &[Member]) {
    if members.is_empty() {
        println!("No members.");
        return;
    }
    println!(
        "{:<38} {:<22} {:<28} {:<9} {:<11} {}",
        "ID", "NAME", "EMAIL", "STATUS", "RENEWAL", "PLAN"
    );
    for m in members {
        println!(
            "{:<38} {:<22} {:<28} {:<9} {:<11} {}",
            m.id,
            m.name,
            m.email,
            m.status,
            m.renewal_date.to_string(),
            m.plan_id
        );
    }
}

fn print_trainers(trainers: &[Trainer]) {
    if trainers.is_empty() {
        println!("No trainers.");
        return;
    }
    println!(
        "{:<40} {:<22} {:<18} {:>7} {:>5}",
        "ID", "NAME", "SPECIALTY", "MEMBERS", "PERF"
    );
    for t in trainers {
        println!(
            "{:<40} {:<22} {:<18} {:>7} {:>4}%",
            t.id, t.name, t.specialty, t.assigned_members, t.performance
        );
    }
}

fn print_plans(plans: &[Plan]) {
    if plans.is_empty() {
        println!("No plans.");
        return;
    }
    println!("{:<40} {:<18} {:>10} {:>7}", "ID", "NAME", "PRICE", "MONTHS");
    for p in plans {
        println!(
            "{:<40} {:<18} {:>10.2} {:>7}",
            p.id, p.name, p.price, p.duration_months
        );
    }
}

fn print_leads(leads: &[Lead]) {
    if leads.is_empty() {
        println!("No leads.");
        return;
    }
    println!(
        "{:<38} {:<22} {:<28} {:<10} {}",
        "ID", "NAME", "EMAIL", "STATUS", "CREATED"
    );
    for l in leads {
        println!(
            "{:<38} {:<22} {:<28} {:<10} {}",
            l.id,
            l.name,
            l.email,
            l.status,
            l.created_at.format("%Y-%m-%d")
        );
    }
}

fn print_board(board: &LeadBoard) {
    for (status, leads) in board.columns() {
        println!("{} ({})", status, leads.len());
        for lead in leads {
            println!("  {}  {} <{}>", lead.id, lead.name, lead.email);
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Config Commands
// ─────────────────────────────────────────────────────────────────

fn handle_config_command(subcommand: ConfigSubcommand, config_path: Option<&str>) -> Result<()> {
    match subcommand {
        ConfigSubcommand::Show => {
            let cfg = AdminConfig::load(config_path)?;
            println!("{}", toml::to_string_pretty(&cfg)?);
        }
        ConfigSubcommand::Init { path, force } => {
            let created = config::init_config(path.as_deref(), force)?;
            println!("Configuration file created: {}", created.display());
        }
        ConfigSubcommand::Validate => {
            AdminConfig::load(config_path)?;
            println!("Configuration is valid.");
        }
    }

    Ok(())
}
