//! App Core for Passify.
//!
//! Central struct wiring the settings engine, backend client, generator
//! panel, and entry table together, and driving screen navigation. Every
//! backend operation here follows the same shape: validate the form,
//! issue one request, map the outcome. Calls are awaited one at a time,
//! so the app behaves as a single-threaded request/response loop.

use std::path::Path;

use crate::forms::auth::{ForgetPasswordForm, SignInForm, SignUpForm};
use crate::forms::entry::EntryForm;
use crate::forms::profile::{
    ChangeEmailForm, ChangePasswordForm, DeleteAccountForm, NameForm,
};
use crate::managers::entry_table::{EntryTable, EntryTableTrait};
use crate::managers::generator_panel::GeneratorPanel;
use crate::services::backend_client::BackendClient;
use crate::services::password_generator::PasswordGenerator;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::entry::Entry;
use crate::types::errors::{ApiError, AppError, SettingsError};
use crate::types::profile::Profile;
use crate::types::settings::ThemeMode;

/// The application's screens. Navigation state only; rendering is the UI
/// layer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    SignIn,
    SignUp,
    ForgetPassword,
    Database,
    Profile,
}

/// Central application struct owning all components and the current screen.
///
/// Session tokens live inside the backend client and are wiped on
/// sign-out; nothing here persists them.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub client: BackendClient,
    pub generator_panel: GeneratorPanel,
    pub entry_table: EntryTable,
    pub screen: Screen,
}

impl App {
    /// Creates a new App with default settings. `settings_path` overrides
    /// the platform config path (used by tests); call [`App::startup`] to
    /// read the settings file.
    pub fn new(settings_path: Option<String>) -> Self {
        let settings_engine = SettingsEngine::new(settings_path);
        let settings = settings_engine.get_settings();
        let client = BackendClient::new(&settings.domain, &settings.project_name);

        Self {
            settings_engine,
            client,
            generator_panel: GeneratorPanel::new(PasswordGenerator::new()),
            entry_table: EntryTable::new(),
            screen: Screen::SignIn,
        }
    }

    /// Startup sequence: load settings from disk and point the client at
    /// the configured domain. Tokens are never persisted, so the app
    /// always starts signed out on the sign-in screen.
    pub fn startup(&mut self) -> Result<(), SettingsError> {
        let settings = self.settings_engine.load()?;
        self.client = BackendClient::new(&settings.domain, &settings.project_name);
        self.screen = Screen::SignIn;
        Ok(())
    }

    /// Free navigation between screens (menu actions, links).
    pub fn go_to(&mut self, screen: Screen) {
        self.screen = screen;
    }

    // ─── Authentication flows ───

    /// Signs in: on success the token pair is stored in the client and the
    /// entry listing is loaded for the database screen.
    pub async fn sign_in(&mut self, form: &SignInForm) -> Result<(), AppError> {
        let payload = form.validate()?;
        self.client.sign_in(&payload).await?;
        self.screen = Screen::Database;
        self.reload().await
    }

    /// Registers an account; on success the user is returned to sign-in
    /// to authenticate with the new credentials.
    pub async fn sign_up(&mut self, form: &SignUpForm) -> Result<(), AppError> {
        let payload = form.validate()?;
        self.client.sign_up(&payload).await?;
        self.screen = Screen::SignIn;
        Ok(())
    }

    /// Requests a password-reset email, then returns to sign-in.
    pub async fn reset_password(&mut self, form: &ForgetPasswordForm) -> Result<(), AppError> {
        let payload = form.validate()?;
        self.client.reset_password(&payload).await?;
        self.screen = Screen::SignIn;
        Ok(())
    }

    /// Wipes the session and all loaded entries, back to sign-in.
    pub fn sign_out(&mut self) {
        self.client.clear_session();
        self.entry_table = EntryTable::new();
        self.screen = Screen::SignIn;
    }

    // ─── Entry listing ───

    /// Reloads the entry listing into the table.
    ///
    /// A 401 means the access token expired: the token is refreshed and
    /// the listing retried exactly once. A second 401, a refresh failure,
    /// or any other error signs the user out; the error is still returned
    /// so the caller can show it.
    pub async fn reload(&mut self) -> Result<(), AppError> {
        match self.client.list_entries().await {
            Ok(entries) => {
                self.entry_table.set_entries(entries);
                Ok(())
            }
            Err(ApiError::Status { code: 401, .. }) => {
                if let Err(e) = self.client.refresh().await {
                    self.sign_out();
                    return Err(e.into());
                }
                match self.client.list_entries().await {
                    Ok(entries) => {
                        self.entry_table.set_entries(entries);
                        Ok(())
                    }
                    Err(e) => {
                        self.sign_out();
                        Err(e.into())
                    }
                }
            }
            Err(e) => {
                self.sign_out();
                Err(e.into())
            }
        }
    }

    /// Creates an entry, then reloads the listing.
    pub async fn add_entry(&mut self, form: &EntryForm) -> Result<(), AppError> {
        let payload = form.validate()?;
        self.client.create_entry(&payload).await?;
        self.reload().await
    }

    /// Fetches one entry to prefill the edit form. `id_url` is the entry's
    /// `id` field, its own detail URL.
    pub async fn fetch_entry(&self, id_url: &str) -> Result<Entry, AppError> {
        Ok(self.client.fetch_entry(id_url).await?)
    }

    /// Updates an entry, then reloads the listing.
    pub async fn edit_entry(&mut self, id_url: &str, form: &EntryForm) -> Result<(), AppError> {
        let payload = form.validate()?;
        self.client.update_entry(id_url, &payload).await?;
        self.reload().await
    }

    /// Deletes an entry. The listing is reloaded whether or not the delete
    /// succeeded; a delete failure takes precedence in the result.
    pub async fn delete_entry(&mut self, id_url: &str) -> Result<(), AppError> {
        let deleted = self.client.delete_entry(id_url).await;
        let reloaded = self.reload().await;
        deleted.map_err(AppError::from).and(reloaded)
    }

    /// Exports the entry listing to a JSON file, refreshing it first so
    /// the export matches the backend. Server identifiers are omitted.
    pub async fn export_entries(&mut self, path: &Path) -> Result<(), AppError> {
        self.reload().await?;
        self.entry_table.export_json(path)?;
        Ok(())
    }

    // ─── Profile flows ───

    pub async fn fetch_profile(&self) -> Result<Profile, AppError> {
        Ok(self.client.fetch_profile().await?)
    }

    pub async fn update_name(&self, form: &NameForm) -> Result<(), AppError> {
        let payload = form.validate()?;
        self.client.update_name(&payload).await?;
        Ok(())
    }

    /// `current_email` is the address shown on the profile screen, needed
    /// for the already-in-use check.
    pub async fn change_email(
        &self,
        current_email: &str,
        form: &ChangeEmailForm,
    ) -> Result<(), AppError> {
        let payload = form.validate(current_email)?;
        self.client.change_email(&payload).await?;
        Ok(())
    }

    pub async fn change_password(&self, form: &ChangePasswordForm) -> Result<(), AppError> {
        let payload = form.validate()?;
        self.client.change_password(&payload).await?;
        Ok(())
    }

    /// Deletes the account and signs out.
    pub async fn delete_account(&mut self, form: &DeleteAccountForm) -> Result<(), AppError> {
        let payload = form.validate()?;
        self.client.delete_account(&payload).await?;
        self.sign_out();
        Ok(())
    }

    // ─── Settings ───

    /// Switches the theme and persists the change.
    pub fn set_theme(&mut self, theme: ThemeMode) -> Result<(), SettingsError> {
        self.settings_engine.update(|s| s.theme = theme)
    }
}
