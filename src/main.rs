use clap::Parser;
use skillbridge::app::screens;
use skillbridge::core::estimator::EstimateForm;
use skillbridge::domain::model::format_cost;
use skillbridge::utils::error::ErrorSeverity;
use skillbridge::utils::{logger, validation::Validate};
use skillbridge::{AppConfig, CliCommand, CliConfig, Console};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting skillbridge");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ skillbridge failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low | ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

fn load_config(cli: &CliConfig) -> skillbridge::Result<AppConfig> {
    cli.validate()?;

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            AppConfig::from_file(path)?
        }
        None => AppConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

async fn run(cli: CliConfig) -> skillbridge::Result<()> {
    let config = load_config(&cli)?;

    match cli.command.unwrap_or(CliCommand::Session) {
        CliCommand::Session => {
            let mut console = Console::new(config.session()?);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = tokio::io::stdout();
            console.run(stdin, &mut stdout).await?;
        }
        CliCommand::Estimate(args) => {
            // 與計算機畫面相同的輸入限制
            let estimator = config.estimator();
            let mut form = EstimateForm::new(&estimator);
            form.set_service_type(&estimator, &args.service);
            form.set_complexity(&estimator, args.complexity);
            form.set_hours(&estimator, args.hours);
            form.set_rush(&estimator, args.rush);
            let quote = form.quote();
            if args.json {
                println!("{}", serde_json::to_string_pretty(quote)?);
            } else {
                println!(
                    "{} ({} pricing): {}",
                    quote.service.name,
                    quote.policy.label(),
                    format_cost(quote.cost)
                );
            }
        }
        CliCommand::Book {
            email,
            password,
            estimate,
        } => {
            let mut session = config.session()?;
            session.login(&email, &password)?;
            session.select_service(&estimate.service)?;
            session.set_complexity(estimate.complexity)?;
            session.set_hours(estimate.hours)?;
            session.set_rush(estimate.rush)?;
            session.book()?;

            if estimate.json {
                let report = serde_json::json!({
                    "email": session.email(),
                    "booking": session.booking(),
                    "channels": session.dispatcher().channel_names(),
                    "notifications": session.notifications(),
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", screens::render(&session));
            }
        }
        CliCommand::Catalog { json } => {
            let estimator = config.estimator();
            let catalog = estimator.catalog();
            let rules = estimator.rules();
            if json {
                let report = serde_json::json!({
                    "services": catalog.entries(),
                    "fallback": catalog.fallback(),
                    "pricing": rules,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for entry in catalog.entries() {
                    println!("{:<8} {} (${}/hr)", entry.id, entry.name, entry.base_rate);
                }
                let fallback = catalog.fallback();
                println!("{:<8} {} (${}/hr)", "*", fallback.name, fallback.base_rate);
                println!(
                    "Rush orders x{}, premium pricing above complexity {}",
                    rules.rush_multiplier, rules.premium_threshold
                );
            }
        }
    }

    Ok(())
}
