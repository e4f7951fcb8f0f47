use clap::Parser;
use cpf_toolkit::adapters::{JsonRenderer, PrettyRenderer, PromptSession};
use cpf_toolkit::config::Profile;
use cpf_toolkit::core::validator::validate;
use cpf_toolkit::domain::ports::ReportRenderer;
use cpf_toolkit::utils::error::{CpfError, ErrorSeverity};
use cpf_toolkit::utils::{logger, validation::Validate};
use cpf_toolkit::ValidatorConfig;

fn main() -> anyhow::Result<()> {
    let mut config = ValidatorConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting cpf-validate");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Some(path) = config.profile.clone() {
        match Profile::from_file(&path) {
            Ok(profile) => {
                config.apply_profile(&profile);
                tracing::info!("📁 Loaded profile from: {}", path);
            }
            Err(e) => {
                eprintln!("❌ Failed to load profile '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let renderer: Box<dyn ReportRenderer> = if config.json {
        Box::new(JsonRenderer)
    } else {
        Box::new(PrettyRenderer)
    };

    if config.cpfs.is_empty() {
        if let Err(e) = run_interactive(renderer.as_ref()) {
            tracing::error!(
                "❌ cpf-validate failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(exit_code_for(&e));
        }
        return Ok(());
    }

    // Batch mode: every argument is checked; the exit code reflects the
    // first rejection.
    let mut first_rejection: Option<CpfError> = None;
    for raw in &config.cpfs {
        match validate(raw) {
            Ok(report) => {
                tracing::info!("✅ {} is valid", report.formatted);
                println!("{}", renderer.valid(&report)?);
            }
            Err(e) => {
                tracing::warn!("❌ {:?} rejected: {}", raw, e);
                println!("{}", renderer.invalid(raw, &e)?);
                first_rejection.get_or_insert(e);
            }
        }
    }

    if let Some(e) = first_rejection {
        std::process::exit(exit_code_for(&e));
    }
    Ok(())
}

fn exit_code_for(error: &CpfError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn run_interactive(renderer: &dyn ReportRenderer) -> cpf_toolkit::Result<()> {
    let mut session = PromptSession::stdio();

    session.say("\n🔍 CPF VALIDATOR")?;
    session.say("Enter a CPF in any format: 123.456.789-09, 12345678909, 123 456 789 09.")?;

    loop {
        let Some(raw) = session.read_cpf()? else {
            break;
        };
        match validate(&raw) {
            Ok(report) => session.say(&renderer.valid(&report)?)?,
            Err(e) => session.say(&renderer.invalid(&raw, &e)?)?,
        }

        if !session.confirm("Validate another CPF? (Y/N):")? {
            break;
        }
    }

    session.say("\n👋 Thanks for using the CPF validator!")?;
    Ok(())
}
