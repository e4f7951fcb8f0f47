use clap::Parser;
use cpf_toolkit::adapters::{JsonRenderer, PrettyRenderer, PromptSession, RngDigitSource};
use cpf_toolkit::config::Profile;
use cpf_toolkit::core::generator::CpfGenerator;
use cpf_toolkit::domain::model::{CpfReport, FiscalRegion, GenerationOutcome};
use cpf_toolkit::domain::ports::ReportRenderer;
use cpf_toolkit::utils::error::ErrorSeverity;
use cpf_toolkit::utils::{logger, validation::Validate};
use cpf_toolkit::GeneratorConfig;

fn main() -> anyhow::Result<()> {
    let mut config = GeneratorConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting cpf-gen");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Some(path) = config.profile.clone() {
        match Profile::from_file(&path) {
            Ok(profile) => {
                if let Err(e) = profile.validate() {
                    tracing::error!("❌ Profile validation failed: {}", e);
                    eprintln!("❌ {}", e.user_friendly_message());
                    std::process::exit(1);
                }
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

    let result = if config.interactive {
        run_interactive(renderer.as_ref())
    } else {
        run_batch(&config, renderer.as_ref())
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ cpf-gen failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn run_batch(
    config: &GeneratorConfig,
    renderer: &dyn ReportRenderer,
) -> cpf_toolkit::Result<()> {
    let region = config.region.and_then(FiscalRegion::from_digit);
    let mut generator = CpfGenerator::new(RngDigitSource::from_entropy());

    for _ in 0..config.count() {
        let cpf = match &region {
            Some(region) => generator.generate_in_region(region),
            None => generator.generate(),
        };
        let outcome = GenerationOutcome {
            report: CpfReport::from_cpf(&cpf),
            requested_region: region.map(|r| r.digit),
        };
        println!("{}", renderer.generated(&outcome)?);
    }

    tracing::info!("✅ Generated {} CPF(s)", config.count());
    Ok(())
}

fn run_interactive(renderer: &dyn ReportRenderer) -> cpf_toolkit::Result<()> {
    let mut session = PromptSession::stdio();
    let mut generator = CpfGenerator::new(RngDigitSource::from_entropy());

    session.say("\n🎯 CPF GENERATOR BY FISCAL REGION 🎯")?;
    session.say("Pick the fiscal region for the CPF to be generated.")?;

    loop {
        let Some(region) = session.choose_region()? else {
            break;
        };
        let cpf = generator.generate_in_region(&region);
        let outcome = GenerationOutcome {
            report: CpfReport::from_cpf(&cpf),
            requested_region: Some(region.digit),
        };
        session.say(&renderer.generated(&outcome)?)?;

        if !session.confirm("Generate another CPF? (Y/N):")? {
            break;
        }
    }

    session.say("\n👋 Thanks for using the CPF generator!")?;
    Ok(())
}
