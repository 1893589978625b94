use clap::{CommandFactory, Parser};

use crate::config::{
    CATALOGUE_ENV, LOG_LEVEL_ENV, MENU_MODE_ENV, PROFILE_ENV, WIDTH_BUDGET_ENV,
};

#[derive(Debug, Parser)]
#[command(name = "portfolio-slideshow", version, about = "Portfolio slideshow")]
pub struct CliArgs {
    /// Print the tag menu (and an optional selection) and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Catalogue file path or http(s) URL
    #[arg(long, value_name = "PATH|URL")]
    pub catalogue: Option<String>,

    /// Animation profile: desktop, firefox or mobile
    #[arg(long, value_name = "PROFILE")]
    pub profile: Option<String>,

    /// Menu build mode: replace or append
    #[arg(long = "menu-mode", value_name = "MODE")]
    pub menu_mode: Option<String>,

    /// Pane width budget the roll-out grows toward
    #[arg(long = "width-budget", value_name = "PIXELS")]
    pub width_budget: Option<String>,

    /// Headless: select this project and run its transition to completion
    #[arg(long, value_name = "NAME")]
    pub select: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(catalogue) = &self.catalogue {
            std::env::set_var(CATALOGUE_ENV, catalogue);
        }
        if let Some(profile) = &self.profile {
            std::env::set_var(PROFILE_ENV, profile);
        }
        if let Some(mode) = &self.menu_mode {
            std::env::set_var(MENU_MODE_ENV, mode);
        }
        if let Some(budget) = &self.width_budget {
            std::env::set_var(WIDTH_BUDGET_ENV, budget);
        }
        if self.debug {
            std::env::set_var(LOG_LEVEL_ENV, "debug");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}
