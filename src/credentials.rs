use std::io;
use std::path::Path;

/// Default output filename, relative to the working directory.
pub const DEFAULT_CREDENTIALS_FILE: &str = "FaunaCredentials.h";

/// The generated credentials header consumed by the Xcode test project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialsFile {
    publisher_secret: String,
    client_secret: String,
}

impl CredentialsFile {
    pub fn new(publisher_secret: String, client_secret: String) -> Self {
        Self {
            publisher_secret,
            client_secret,
        }
    }

    /// Render the fixed Objective-C header template.
    pub fn render(&self) -> String {
        format!(
            "#ifndef FAUNA_CREDENTIALS_h\n\
             #define FAUNA_CREDENTIALS_h\n\
             \n\
             #define FAUNA_PUBLISHER_KEY @\"{}\"\n\
             #define FAUNA_CLIENT_KEY @\"{}\"\n\
             \n\
             #endif\n",
            self.publisher_secret, self.client_secret
        )
    }

    /// Write the header to `path`, replacing any existing file without confirmation.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        std::fs::write(path, self.render())
    }
}
