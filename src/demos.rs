//! The narrated walk-throughs behind the `*_demo` binaries.
//!
//! Each demo prints to stdout for the reader and returns an error only when a
//! step that is expected to succeed does not.

use std::env;

use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::builder::{HttpRequest, HttpRequestTelescoping, Pizza, PizzaDirector};
use crate::config::CourseConfig;
use crate::facade::DeploymentFacade;
use crate::factory::{
    all_factories, EmailNotificationFactory, NotificationFactory, SmsNotificationFactory,
};
use crate::prototype::PrototypeRegistry;
use crate::singleton::guarded::{persist, restore};
use crate::singleton::{
    attack_matrix, race_first_access, DoubleCheckedSingleton, EagerSingleton, EnumSingleton,
    GuardedSingleton, HolderSingleton, LazySingleton, RaceReport, Singleton, Strategy,
    SynchronizedSingleton, Verdict,
};
use crate::solid::{
    BankService, DepositService, EmailOtp, InterestInfoService, Ledger, OtpChannel, OtpService,
    SmsOtp, WhatsAppOtp, WithdrawService,
};

fn heading(title: &str) {
    println!("\n{}", format!("=== {title} ===").bold().cyan());
}

pub fn builder_demo() -> Result<()> {
    heading("Builder: HTTP request");
    let request = HttpRequest::builder("https://api.example.com/users")
        .method("POST")
        .header("Content-Type", "application/json")
        .header("Authorization", "Bearer token")
        .query_param("page", "1")
        .body(r#"{"name":"ana"}"#)
        .timeout_ms(5_000)
        .build();
    println!("{request}");

    let minimal = HttpRequest::builder("https://api.example.com/health").build();
    println!("{minimal}");

    heading("Builder: pizza");
    let builder = Pizza::builder("Thin Crust", "Tomato")
        .topping("Olives")
        .spicy(true);
    let first = builder.build();
    let second = builder.extra_cheese(true).build();
    println!("{first}");
    println!("{second}");

    for (name, pizza) in PizzaDirector.menu() {
        println!("{:<10} {pizza}", name.bold());
    }

    heading("Anti-pattern: telescoping constructors");
    let telescoped = HttpRequestTelescoping::with_body(
        "https://api.example.com/users",
        "POST",
        None,
        None,
        Some(r#"{"name":"ana"}"#),
    );
    println!("{telescoped:?}");
    Ok(())
}

fn print_race(strategy: Strategy, report: &RaceReport) {
    let verdict = if report.all_identical() {
        "one instance".green()
    } else {
        format!("{} instances", report.distinct_instances()).red()
    };
    println!(
        "{:<15} {} threads -> {verdict}",
        strategy.name(),
        report.threads
    );
}

pub fn singleton_demo(config: &CourseConfig) -> Result<()> {
    heading("Singleton: strategies");
    for strategy in Strategy::ALL {
        println!(
            "{:<15} lazy={:<5} thread-safe={:<5} locks-after-init={:<5} {}",
            strategy.name(),
            strategy.is_lazy(),
            strategy.is_thread_safe(),
            strategy.locks_after_init(),
            strategy.mechanism()
        );
    }

    heading("Singleton: first-access race");
    let threads = config.singleton.threads;
    print_race(Strategy::Lazy, &race_first_access::<LazySingleton>(threads));
    print_race(
        Strategy::Synchronized,
        &race_first_access::<SynchronizedSingleton>(threads),
    );
    print_race(
        Strategy::DoubleChecked,
        &race_first_access::<DoubleCheckedSingleton>(threads),
    );
    print_race(
        Strategy::StaticHolder,
        &race_first_access::<HolderSingleton>(threads),
    );
    print_race(Strategy::Eager, &race_first_access::<EagerSingleton>(threads));
    print_race(Strategy::Enum, &race_first_access::<EnumSingleton>(threads));
    print_race(
        Strategy::Guarded,
        &race_first_access::<GuardedSingleton>(threads),
    );
    println!(
        "lock acquisitions: {}, double-checked slow path entries: {}",
        SynchronizedSingleton::lock_acquisitions(),
        DoubleCheckedSingleton::slow_path_entries()
    );
    println!("{}", EnumSingleton::instance().greet());

    heading("Singleton: attacks");
    for breach in attack_matrix().context("attack matrix failed")? {
        let verdict = match breach.verdict {
            Verdict::Breaks => breach.verdict.to_string().red().bold(),
            Verdict::Survives | Verdict::Refused => breach.verdict.to_string().green(),
            Verdict::NotApplicable => breach.verdict.to_string().dimmed(),
        };
        println!(
            "{:<15} {:<26} {verdict}",
            breach.strategy.name(),
            breach.attack.to_string()
        );
    }

    heading("Singleton: persisted and restored");
    let path = env::temp_dir().join("singleton.obj");
    let canonical = GuardedSingleton::instance();
    persist(canonical, &path).with_context(|| format!("writing {}", path.display()))?;
    let restored: &'static GuardedSingleton =
        restore(&path).with_context(|| format!("reading {}", path.display()))?;
    println!(
        "written {} read back {} same instance: {}",
        canonical.instance_id(),
        restored.instance_id(),
        restored.is_canonical()
    );
    Ok(())
}

pub fn prototype_demo(config: &CourseConfig) -> Result<()> {
    heading("Prototype: enemy registry");
    let registry = PrototypeRegistry::from_templates(&config.prototype.templates);
    println!("registered: {}", registry.keys().join(", "));

    for key in registry.keys() {
        let enemy = registry.get(key)?;
        println!("{key:<8} {}", enemy.stats());
    }

    if let Some(key) = registry.keys().first().copied() {
        let mut copy = registry.get(key)?;
        copy.set_health(copy.health() / 2);
        println!("damaged copy: {}", copy.stats());
        println!("template:     {}", registry.get(key)?.stats());
    }

    match registry.get("boss") {
        Ok(enemy) => println!("boss: {}", enemy.stats()),
        Err(err) => println!("{}", err.to_string().yellow()),
    }
    Ok(())
}

pub fn factory_demo(config: &CourseConfig) -> Result<()> {
    heading("Factory Method: notifications");
    for factory in all_factories(&config.notification) {
        let delivery = factory
            .send("Welcome to the world of Rust")
            .context("notification was rejected")?;
        println!("{delivery}");
    }

    let long_message = "x".repeat(config.notification.sms_max_len + 1);
    if let Err(err) = SmsNotificationFactory::new(&config.notification).send(&long_message) {
        println!("{}", err.to_string().yellow());
    }
    if let Err(err) = EmailNotificationFactory.send("") {
        println!("{}", err.to_string().yellow());
    }
    Ok(())
}

pub fn facade_demo(config: &CourseConfig) -> Result<()> {
    heading("Facade: deployment");
    let facade = DeploymentFacade::new(&config.deployment);

    let Some(primary) = config.deployment.known_servers.first() else {
        bail!("no deployment servers configured");
    };
    let report = facade
        .deploy_application("main", primary)
        .context("deploying main")?;
    println!("{}", report.to_string().green());

    if let Some(secondary) = config.deployment.known_servers.get(1) {
        let report = facade
            .deploy_application("feature/new-ui", secondary)
            .context("deploying feature branch")?;
        println!("{}", report.to_string().green());
    }

    if let Err(err) = facade.deploy_application("hotfix", "unknown.server") {
        println!("{}", err.to_string().red());
    }
    Ok(())
}

pub fn solid_demo() -> Result<()> {
    heading("SOLID: single responsibility");
    let mut ledger = Ledger::new();
    ledger.open_account("ACC-1", 1_000);

    let balance = DepositService.deposit(&mut ledger, 500, "ACC-1")?;
    println!("deposited 500, balance {balance}");
    let paid = WithdrawService.withdraw(&mut ledger, 300, "ACC-1")?;
    println!("withdrew {paid}, balance {}", ledger.balance("ACC-1")?);
    if let Err(err) = WithdrawService.withdraw(&mut ledger, 10_000, "ACC-1") {
        println!("{}", err.to_string().yellow());
    }
    for loan in ["home", "personal", "car"] {
        let rate = InterestInfoService.loan_interest_rate(loan)?;
        println!("{loan:<9} loan: {rate:.2}%");
    }
    let otp = OtpService::new(Box::new(EmailOtp)).send_otp("ana@example.com", "482910")?;
    println!("{otp}");

    let mut bank = BankService::new(ledger.clone());
    bank.deposit(100, "ACC-1")?;
    println!(
        "god object balance {} (split services balance {})",
        bank.ledger().balance("ACC-1")?,
        ledger.balance("ACC-1")?
    );

    heading("SOLID: open/closed");
    let channels: [&dyn OtpChannel; 3] = [&EmailOtp, &SmsOtp, &WhatsAppOtp];
    for channel in channels {
        println!("{}", channel.send_otp("ana", "482910")?);
        match bank.send_otp(channel.medium(), "ana", "482910") {
            Ok(_) => println!("  branching dispatcher handles {}", channel.medium()),
            Err(err) => println!("  {}", err.to_string().yellow()),
        }
    }
    Ok(())
}

/// Every demo in course order.
pub fn run_all(config: &CourseConfig) -> Result<()> {
    builder_demo().context("builder demo")?;
    singleton_demo(config).context("singleton demo")?;
    prototype_demo(config).context("prototype demo")?;
    factory_demo(config).context("factory demo")?;
    facade_demo(config).context("facade demo")?;
    solid_demo().context("solid demo")?;
    Ok(())
}
