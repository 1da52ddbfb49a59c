//! Wiring of configuration, storage, the content service and the session.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use dossier_application::{SessionController, SynthesisPipeline};
use dossier_core::config::RootConfig;
use dossier_core::error::DossierError;
use dossier_core::history::BlobStore;
use dossier_core::synthesis::{ContentPart, ContentService, ImageRequest, TextRequest};
use dossier_infrastructure::{ConfigService, DossierPaths, FileBlobStore};
use dossier_interaction::GeminiApiClient;
use url::Url;

/// Options shared by every subcommand.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GlobalArgs {
    /// Configuration file (default: ~/.config/dossier/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding history and logs
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Address share links are built on
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<Url>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalArgs {
    /// Locations from the command-line flags alone, before the configuration
    /// file is read.
    pub fn paths(&self) -> DossierPaths {
        let mut paths = DossierPaths::new();
        if let Some(config) = &self.config {
            paths = paths.with_config_file(config);
        }
        if let Some(data_dir) = &self.data_dir {
            paths = paths.with_data_dir(data_dir);
        }
        paths
    }
}

pub struct AppContext {
    pub config: RootConfig,
    pub paths: DossierPaths,
    base_url: Url,
}

impl AppContext {
    pub fn load(args: &GlobalArgs) -> Result<Self> {
        let paths = args.paths();
        let config = ConfigService::from_paths(&paths)?.load_with_env()?;
        let paths = paths.or_data_dir(config.storage.data_dir.as_deref());

        let base_url = match &args.base_url {
            Some(url) => url.clone(),
            None => Url::parse(&config.share.base_url).with_context(|| {
                format!("invalid [share].base_url '{}'", config.share.base_url)
            })?,
        };

        Ok(Self {
            config,
            paths,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn blob_store(&self) -> Result<Arc<dyn BlobStore>> {
        let data_dir = self.paths.data_dir()?;
        Ok(Arc::new(FileBlobStore::new(data_dir)))
    }

    /// The Gemini client, or a stand-in that reports the missing key on use so
    /// that read-only commands work without one.
    pub fn content_service(&self) -> Arc<dyn ContentService> {
        match GeminiApiClient::from_config(&self.config.gemini) {
            Ok(client) => Arc::new(client),
            Err(e) => Arc::new(UnconfiguredService {
                reason: e.to_string(),
            }),
        }
    }

    pub fn pipeline(&self) -> Arc<SynthesisPipeline> {
        Arc::new(SynthesisPipeline::new(
            self.content_service(),
            self.config.gemini.synthesis_settings(),
        ))
    }

    /// Starts a session, optionally from an address carrying a share token.
    pub fn session(&self, address: Option<&Url>) -> Result<SessionController> {
        Ok(SessionController::start(
            self.pipeline(),
            self.blob_store()?,
            self.base_url.clone(),
            address,
        ))
    }
}

struct UnconfiguredService {
    reason: String,
}

#[async_trait]
impl ContentService for UnconfiguredService {
    async fn generate_text(&self, _request: &TextRequest) -> dossier_core::error::Result<String> {
        Err(DossierError::config(self.reason.clone()))
    }

    async fn generate_image(
        &self,
        _request: &ImageRequest,
    ) -> dossier_core::error::Result<Vec<ContentPart>> {
        Err(DossierError::config(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_paths_follow_flags() {
        let args = GlobalArgs {
            config: Some(PathBuf::from("/etc/dossier/custom.toml")),
            data_dir: Some(PathBuf::from("/tmp/dossier-data")),
            ..GlobalArgs::default()
        };
        let paths = args.paths();

        assert_eq!(
            paths.logs_dir().unwrap(),
            Path::new("/tmp/dossier-data").join("logs")
        );
        assert_eq!(paths.config_dir().unwrap(), Path::new("/etc/dossier"));
    }

    #[test]
    fn test_load_reads_config_from_flag_paths() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path();
        let config_file = dir.join("config.toml");
        std::fs::write(&config_file, "[share]\nbase_url = \"https://d.example/\"\n").unwrap();

        let args = GlobalArgs {
            config: Some(config_file),
            data_dir: Some(dir.join("data")),
            ..GlobalArgs::default()
        };
        let ctx = AppContext::load(&args).unwrap();

        assert_eq!(ctx.base_url().as_str(), "https://d.example/");
        assert_eq!(ctx.paths.logs_dir().unwrap(), args.paths().logs_dir().unwrap());
    }
}
