use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    #[command(flatten)]
    Lifecycle(LifecycleCommand),

    /// Print the attribute schema of a resource type
    Schema {
        /// Resource type name
        #[arg(default_value = "auth0_user")]
        resource_type: String,
    },
}

/// Commands that reach the tenant. Printed state masks sensitive
/// attributes, so keep your own state file to pass as `--old`.
#[derive(Subcommand)]
pub(crate) enum LifecycleCommand {
    /// Create the user declared in a state file, then print its refreshed state
    Create {
        /// Desired state (.json, or TOML for any other extension)
        #[arg(long)]
        state: PathBuf,
    },

    /// Read a user into state
    Read {
        /// User ID
        id: String,

        /// Prior state whose password and conn are kept when the API omits them
        #[arg(long)]
        state: Option<PathBuf>,
    },

    /// Apply the differences between two state files to a user
    Update {
        /// User ID
        id: String,

        /// State as last applied (your file, not masked output)
        #[arg(long)]
        old: PathBuf,

        /// Desired state
        #[arg(long)]
        new: PathBuf,
    },

    /// Delete a user
    Delete {
        /// User ID
        id: String,
    },

    /// Adopt an existing user by ID and print its state
    Import {
        /// User ID, taken verbatim
        id: String,
    },
}
