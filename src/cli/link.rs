//! CLI commands for ids and links

use clap::Subcommand;

use crate::error::HorizonResult;
use crate::ids::{decrypt_id, encrypt_id, extract_customer_id_from_url};

/// Id subcommands
#[derive(Subcommand, Debug)]
pub enum IdCommands {
    /// Encode an id for use in a URL
    Encode {
        /// Raw id
        id: String,
    },

    /// Decode an id produced by `encode`
    Decode {
        /// Encoded id
        encoded: String,
    },

    /// Extract the customer id from a customer URL
    Customer {
        /// Customer resource URL
        url: String,
    },
}

/// Handle id commands
pub fn handle_id_command(cmd: IdCommands) -> HorizonResult<()> {
    match cmd {
        IdCommands::Encode { id } => println!("{}", encrypt_id(&id)),
        IdCommands::Decode { encoded } => println!("{}", decrypt_id(&encoded)?),
        IdCommands::Customer { url } => println!("{}", extract_customer_id_from_url(&url)),
    }
    Ok(())
}
