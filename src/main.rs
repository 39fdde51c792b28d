use ghweekly::cli::Cli;
use ghweekly::config::{Config, ConfigLoader, InitResult};
use ghweekly::core::activity::{Classifier, TimeWindow};
use ghweekly::core::period::{default_start, parse_start_date};
use ghweekly::core::{ReportFormatter, WeeklyReport};
use ghweekly::github::{EventSource, FileSource, GitHubClient};
use ghweekly::utils::token::{resolve_token, TOKEN_ENV_VAR};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let cli = Cli::parse_args();
    init_logging(&cli);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(cli: &Cli) {
    let filter = match cli.log_level() {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> ghweekly::Result<()> {
    // Handle configuration commands
    if cli.init {
        let result = match &cli.config {
            Some(path) => Config::init_at(path)?,
            None => Config::init()?,
        };
        match result {
            InitResult::Created(path) => println!("Created config at {}", path.display()),
            InitResult::AlreadyExists(path) => {
                println!("Config already exists at {}", path.display())
            }
        }
        return Ok(());
    }

    let mut config = ConfigLoader::load(cli.config.as_deref())?;
    cli.apply_to(&mut config);

    if cli.print {
        return config.print();
    }

    if cli.check {
        config.check()?;
        println!("✓ Configuration valid");
        return Ok(());
    }

    config.validate()?;
    let user = config.require_user()?.to_string();

    let start = match &cli.start {
        Some(start) => parse_start_date(start)?,
        None => default_start(chrono::Utc::now()),
    };
    let window = TimeWindow::new(start, config.window_duration()?)?;

    let source: Box<dyn EventSource> = match &cli.events_file {
        Some(path) => Box::new(FileSource::new(path)),
        None => {
            let token = resolve_token(
                config.token_file.as_deref(),
                std::env::var(TOKEN_ENV_VAR).ok(),
            )?;
            if token.is_none() {
                tracing::warn!("no API token configured, requests are unauthenticated");
            }
            Box::new(GitHubClient::new(config.client_options(token)))
        }
    };

    let report = WeeklyReport::new(
        Classifier::new(&user).with_wip_marker(&config.wip_marker),
        window,
        ReportFormatter::new(&config.report.header, config.report.indent),
    );

    println!("{}", report.generate(source.as_ref())?);
    Ok(())
}
