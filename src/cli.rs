//! Command line interface
//!
//! Flags given on the command line win over the config file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::form::Fares;

#[derive(Debug, Parser)]
#[command(name = "airbook", author, version, about = "Search flights and manage bookings from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Backend base URL, e.g. http://127.0.0.1:5000
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Delay between the last keystroke and the city lookup
    #[arg(long, global = true, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Read the config from this file instead of ~/.config/airbook/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Economy fare; enables the price line on the search screen
    #[arg(long, value_name = "AMOUNT")]
    pub base_price: Option<f64>,

    /// Business fare (default: twice the base fare)
    #[arg(long, value_name = "AMOUNT", requires = "base_price")]
    pub business_price: Option<f64>,

    /// First class fare (default: three times the base fare)
    #[arg(long, value_name = "AMOUNT", requires = "base_price")]
    pub first_price: Option<f64>,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Print the cities matching QUERY, one per line
    Cities { query: String },

    /// Cancel a booking by its reference
    Cancel {
        reference: String,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

impl Cli {
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.autocomplete.debounce_ms = debounce_ms;
        }
    }

    pub fn fares(&self) -> Option<Fares> {
        self.base_price
            .map(|base| Fares::new(base, self.business_price, self.first_price))
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
