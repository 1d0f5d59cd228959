//! Passify — a desktop password-manager client for a Django REST backend.
//!
//! Entry point: runs an interactive console demo of every component. The
//! backend demos talk to an unreachable port so the walkthrough works
//! offline, surfacing the same typed errors a real outage would.

#[tokio::main]
async fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                Passify v{} — Demo Mode                   ║", env!("CARGO_PKG_VERSION"));
    println!("║       Desktop password manager, console walkthrough         ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_settings();
    demo_generator();
    demo_generator_panel();
    demo_forms();
    demo_profile();
    demo_entry_table();
    demo_backend_client().await;
    demo_app_core().await;

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All 8 components demonstrated successfully!");
    println!("  Passify is ready for UI integration.");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_settings() {
    use passify::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
    use passify::types::settings::ThemeMode;
    section("Settings Engine");

    let mut engine = SettingsEngine::new(Some("demo_settings.json".to_string()));
    let settings = engine.load().unwrap();
    println!("  Theme: {:?}", settings.theme);
    println!("  Backend domain: {}", settings.domain);
    println!("  Project name: {}", settings.project_name);

    engine.update(|s| s.theme = ThemeMode::Dark).unwrap();
    println!("  Switched theme to: {:?}", engine.get_settings().theme);

    engine.reset().unwrap();
    println!("  Reset to defaults: theme = {:?}", engine.get_settings().theme);
    let _ = std::fs::remove_file("demo_settings.json");
    println!("  ✓ SettingsEngine OK");
    println!();
}

fn demo_generator() {
    use passify::services::password_generator::{PasswordGenerator, PasswordGeneratorTrait};
    use passify::types::generator::GenerationPolicy;
    section("Password Generator");

    let mut generator = PasswordGenerator::with_seed(42);

    let policy = GenerationPolicy {
        include_upper: true,
        include_lower: true,
        include_digits: true,
        include_symbols: true,
        length: 20,
    };
    let password = generator.generate(&policy).unwrap();
    println!("  Full pool ({} chars): {}", policy.effective_pool().len(), password);

    let digits_only = GenerationPolicy {
        include_digits: true,
        length: 6,
        ..GenerationPolicy::default()
    };
    println!("  PIN-style (digits, 6): {}", generator.generate(&digits_only).unwrap());

    let none = GenerationPolicy {
        length: 12,
        ..GenerationPolicy::default()
    };
    println!("  No classes enabled: \"{}\"", generator.generate(&none).unwrap());

    let negative = GenerationPolicy {
        include_lower: true,
        length: -3,
        ..GenerationPolicy::default()
    };
    println!("  Negative length: {}", generator.generate(&negative).unwrap_err());
    println!("  ✓ PasswordGenerator OK");
    println!();
}

fn demo_generator_panel() {
    use passify::managers::generator_panel::{GeneratorPanel, GeneratorPanelTrait};
    use passify::services::password_generator::PasswordGenerator;
    section("Generator Panel");

    let mut panel = GeneratorPanel::new(PasswordGenerator::with_seed(7));
    panel.set_include_lower(true).unwrap();
    panel.set_include_digits(true).unwrap();

    panel.set_slider(16).unwrap();
    println!("  Slider -> 16: stepper synced to {}", panel.stepper_value());
    println!("  Password: {}", panel.password());

    panel.set_stepper(24).unwrap();
    println!("  Stepper -> 24: slider synced to {}", panel.slider_value());
    println!("  Regenerated: {} chars", panel.password().len());

    panel.set_include_symbols(true).unwrap();
    println!("  Enabled symbols, pool now {} chars", panel.policy().effective_pool().len());

    panel.set_include_lower(false).unwrap();
    panel.set_include_digits(false).unwrap();
    panel.set_include_symbols(false).unwrap();
    println!("  All classes off: password = \"{}\"", panel.password());
    println!("  ✓ GeneratorPanel OK");
    println!();
}

fn demo_forms() {
    use passify::forms::auth::{SignInForm, SignUpForm};
    use passify::forms::entry::EntryForm;
    use passify::forms::profile::ChangeEmailForm;
    section("Form Validation");

    let form = SignInForm {
        email: "ada@example.com".to_string(),
        password: "hunter22".to_string(),
    };
    println!("  Valid sign-in accepted: {}", form.validate().is_ok());

    let bad_email = SignInForm {
        email: "ada.example.com".to_string(),
        password: "hunter22".to_string(),
    };
    println!("  Bad email: {}", bad_email.validate().unwrap_err());

    let short = SignUpForm {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        password: "short".to_string(),
        re_password: "short".to_string(),
    };
    println!("  Short sign-up password: {}", short.validate().unwrap_err());

    let entry = EntryForm {
        title: "GitHub".to_string(),
        ..EntryForm::default()
    };
    println!("  Entry missing fields: {}", entry.validate().unwrap_err());

    let unchanged = ChangeEmailForm {
        current_password: "hunter22".to_string(),
        new_email: "ada@example.com".to_string(),
        re_new_email: "ada@example.com".to_string(),
    };
    println!(
        "  Unchanged email: {}",
        unchanged.validate("ada@example.com").unwrap_err()
    );
    println!("  ✓ Forms OK");
    println!();
}

fn demo_profile() {
    use chrono::{TimeZone, Utc};
    use passify::types::profile::Profile;
    section("Profile Display");

    let profile = Profile {
        id: "http://127.0.0.1:8000/auth/users/1/".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        last_login: Some(Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap()),
        date_joined: Utc.with_ymd_and_hms(2023, 11, 2, 18, 45, 12).unwrap(),
    };
    println!("  Name: {} {}", profile.first_name, profile.last_name);
    println!("  Joined: {}", profile.date_joined_display());
    println!("  Last login: {}", profile.last_login_display());

    let fresh = Profile {
        last_login: None,
        ..profile
    };
    println!("  Never signed in shows: \"{}\"", fresh.last_login_display());
    println!("  ✓ Profile OK");
    println!();
}

fn demo_entry_table() {
    use passify::managers::entry_table::{EntryTable, EntryTableTrait};
    use passify::types::entry::Entry;
    section("Entry Table");

    let entries = vec![
        Entry {
            id: "http://127.0.0.1:8000/my/database/1/".to_string(),
            title: "GitHub".to_string(),
            username: "ada".to_string(),
            password: "s3cret!Pass".to_string(),
            url: "https://github.com".to_string(),
            notes: "work account".to_string(),
        },
        Entry {
            id: "http://127.0.0.1:8000/my/database/2/".to_string(),
            title: "Mail".to_string(),
            username: "ada@example.com".to_string(),
            password: "another-pass".to_string(),
            url: "https://mail.example.com".to_string(),
            notes: String::new(),
        },
        Entry {
            id: "http://127.0.0.1:8000/my/database/3/".to_string(),
            title: "Bank".to_string(),
            username: "ada.lovelace".to_string(),
            password: "pin-code-9".to_string(),
            url: "https://bank.example.com".to_string(),
            notes: "joint account".to_string(),
        },
    ];

    let mut table = EntryTable::new();
    table.set_entries(entries);
    println!("  Status: {}", table.status_line());
    println!("  Password cells show: {}", table.masked_password());

    table.apply_filter("GIT");
    println!("  Filter \"GIT\": {} of {} rows visible", table.visible_rows().len(), table.row_count());

    table.apply_filter("account");
    println!("  Filter \"account\": {} rows (notes are searched too)", table.visible_rows().len());

    table.apply_filter("");
    println!("  Cleared filter: {} rows visible", table.visible_rows().len());

    table.export_json(std::path::Path::new("demo_export.json")).unwrap();
    let exported = std::fs::read_to_string("demo_export.json").unwrap();
    println!("  Exported {} bytes, ids stripped: {}", exported.len(), !exported.contains("\"id\""));
    let _ = std::fs::remove_file("demo_export.json");
    println!("  ✓ EntryTable OK");
    println!();
}

async fn demo_backend_client() {
    use passify::services::backend_client::{extract_error_message, BackendClient};
    use passify::types::auth::SignInPayload;
    section("Backend Client (offline)");

    let mut client = BackendClient::new("http://127.0.0.1:9", "Passify");
    println!("  Authenticated: {}", client.is_authenticated());

    let err = client.fetch_profile().await.unwrap_err();
    println!("  Profile without session: {}", err);

    let payload = SignInPayload {
        email: "ada@example.com".to_string(),
        password: "hunter22".to_string(),
    };
    match client.sign_in(&payload).await {
        Err(e) => println!("  Sign-in, backend unreachable: {}", e),
        Ok(()) => println!("  Sign-in unexpectedly succeeded"),
    }

    let body = r#"{"detail": "No active account found with the given credentials"}"#;
    println!("  Error body extraction: {}", extract_error_message(body));
    println!("  ✓ BackendClient OK");
    println!();
}

async fn demo_app_core() {
    use passify::app::{App, Screen};
    use passify::forms::auth::SignInForm;
    use passify::services::settings_engine::SettingsEngineTrait;
    use passify::types::settings::ThemeMode;
    section("App Core (full lifecycle)");

    let mut app = App::new(Some("demo_app_settings.json".to_string()));
    app.settings_engine
        .update(|s| s.domain = "http://127.0.0.1:9".to_string())
        .unwrap();
    app.startup().unwrap();
    println!("  Screen after startup: {:?}", app.screen);
    println!("  Backend domain: {}", app.settings_engine.get_settings().domain);

    app.set_theme(ThemeMode::Dark).unwrap();
    println!("  Theme persisted: {:?}", app.settings_engine.get_settings().theme);

    let form = SignInForm {
        email: "ada@example.com".to_string(),
        password: "hunter22".to_string(),
    };
    match app.sign_in(&form).await {
        Err(e) => println!("  Sign-in against offline backend: {}", e),
        Ok(()) => println!("  Sign-in unexpectedly succeeded"),
    }
    println!("  Still on {:?} after failure", app.screen);

    app.go_to(Screen::SignUp);
    println!("  Navigated to: {:?}", app.screen);
    app.sign_out();
    println!("  Signed out, back to: {:?}", app.screen);

    let _ = std::fs::remove_file("demo_app_settings.json");
    println!("  ✓ App Core OK");
}
