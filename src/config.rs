use crate::context::Context;
use crate::error::Error;
use crate::naming::{Identity, Naming};
use crate::result::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the base directory when none is given.
pub const CONFIG_FILE: &str = "workshop.toml";

/// On-disk shape of `workshop.toml`
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct WorkshopToml {
    pub author: String,
    pub name: String,
    pub version: String,

    #[serde(default)]
    pub files: Vec<String>,

    #[serde(default)]
    pub naming: Naming,

    #[serde(default)]
    pub filename: Option<String>,

    #[serde(default)]
    pub build_dir: Option<String>,

    #[serde(default)]
    pub dist_dir: Option<String>,
}

/// Everything a single packaging run needs, resolved and validated
#[derive(Debug, Clone)]
pub struct Config {
    pub identity: Identity,
    /// Entries copied into the staging directory, in order
    pub files: Vec<PathBuf>,
    pub naming: Naming,
    pub filename: Option<String>,
    pub build_dir: PathBuf,
    pub dist_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            identity: Identity {
                author: "klamann".to_string(),
                name: "bigger train stations".to_string(),
                version: "1.0-beta".to_string(),
            },
            files: [
                "res",
                "mod.lua",
                "strings.lua",
                "image_00.tga",
                "workshop_fileid.txt",
                "workshop_preview.jpg",
                "Filebase.md",
                "Workshop.md",
            ]
            .into_iter()
            .map(PathBuf::from)
            .collect(),
            naming: Naming::Authored,
            filename: None,
            build_dir: PathBuf::from(".build"),
            dist_dir: PathBuf::from("dist"),
        }
    }
}

impl From<WorkshopToml> for Config {
    fn from(toml: WorkshopToml) -> Self {
        let defaults = Config::default();
        Config {
            identity: Identity {
                author: toml.author,
                name: toml.name,
                version: toml.version,
            },
            files: toml.files.into_iter().map(PathBuf::from).collect(),
            naming: toml.naming,
            filename: toml.filename,
            build_dir: toml.build_dir.map(PathBuf::from).unwrap_or(defaults.build_dir),
            dist_dir: toml.dist_dir.map(PathBuf::from).unwrap_or(defaults.dist_dir),
        }
    }
}

impl Config {
    /// Load `workshop.toml` from the base directory, falling back to the
    /// built-in profile when it is absent.
    pub fn load(ctx: &Context) -> Result<Self> {
        let path = ctx.resolve(Path::new(CONFIG_FILE));
        if path.is_file() {
            Self::load_from(&path)
        } else {
            let config = Config::default();
            config.validate()?;
            Ok(config)
        }
    }

    /// Load an explicitly named config file; it must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let toml: WorkshopToml = toml::from_str(content)?;
        let config = Config::from(toml);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let Identity {
            author,
            name,
            version,
        } = &self.identity;

        for (key, value) in [("author", author), ("name", name), ("version", version)] {
            if value.trim().is_empty() {
                return Err(Error::InvalidConfig(format!("`{}` must not be empty", key)));
            }
        }

        for file in &self.files {
            if file.file_name().is_none() {
                return Err(Error::InvalidConfig(format!(
                    "entry `{}` has no base name",
                    file.display()
                )));
            }
        }

        Ok(())
    }

    /// Archive file name including the `.zip` extension
    pub fn archive_name(&self) -> String {
        let style = self.naming.style();
        let stem = match &self.filename {
            Some(template) => self.identity.render_stem(template, style),
            None => self.identity.archive_stem(style),
        };
        format!("{}.zip", stem)
    }
}
