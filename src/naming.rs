use crate::tpl::Tpl;
use serde::{Deserialize, Serialize};

/// Suffix appended to every staging directory name.
const STAGING_SUFFIX: &str = "1";

/// Who published the mod and which release is being packaged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub author: String,
    pub name: String,
    pub version: String,
}

/// Archive naming presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Naming {
    /// `<author>_<name_with_underscores>_<version>`
    #[default]
    Authored,
    /// `<name-with-hyphens>_<version>`
    Hyphenated,
}

impl Naming {
    pub fn style(self) -> NamingStyle {
        match self {
            Naming::Authored => NamingStyle {
                separator: '_',
                include_author: true,
            },
            Naming::Hyphenated => NamingStyle {
                separator: '-',
                include_author: false,
            },
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "authored" => Some(Naming::Authored),
            "hyphenated" => Some(Naming::Hyphenated),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamingStyle {
    /// Replaces spaces in the app name
    pub separator: char,
    pub include_author: bool,
}

impl Identity {
    fn name_with(&self, separator: char) -> String {
        self.name.replace(' ', &separator.to_string())
    }

    /// Staging directory base name; also the single root entry of the archive.
    pub fn staging_dir_name(&self) -> String {
        let name = self.name_with('_');
        [self.author.as_str(), name.as_str(), STAGING_SUFFIX].join("_")
    }

    /// Archive file stem (without `.zip`).
    pub fn archive_stem(&self, style: NamingStyle) -> String {
        let name = self.name_with(style.separator);
        let mut parts: Vec<&str> = Vec::with_capacity(3);
        if style.include_author {
            parts.push(&self.author);
        }
        parts.push(&name);
        parts.push(&self.version);
        parts.join("_")
    }

    /// Expand a `$AUTHOR`/`$NAME`/`$VERSION` file name template.
    pub fn render_stem(&self, template: &str, style: NamingStyle) -> String {
        let mut tpl = Tpl::new();
        tpl.register("AUTHOR", &self.author);
        tpl.register("NAME", self.name_with(style.separator));
        tpl.register("VERSION", &self.version);
        tpl.parse(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> Identity {
        Identity {
            author: "klamann".to_string(),
            name: "demo mod".to_string(),
            version: "1.0".to_string(),
        }
    }

    #[test]
    fn test_staging_dir_name() {
        assert_eq!(demo().staging_dir_name(), "klamann_demo_mod_1");
    }

    #[test]
    fn test_authored_archive_stem() {
        let stem = demo().archive_stem(Naming::Authored.style());
        assert_eq!(stem, "klamann_demo_mod_1.0");
    }

    #[test]
    fn test_hyphenated_archive_stem() {
        let stem = demo().archive_stem(Naming::Hyphenated.style());
        assert_eq!(stem, "demo-mod_1.0");
    }

    #[test]
    fn test_staging_name_ignores_style() {
        let id = Identity {
            author: "klamann".to_string(),
            name: "bigger train stations".to_string(),
            version: "1.0-beta2".to_string(),
        };
        assert_eq!(id.staging_dir_name(), "klamann_bigger_train_stations_1");
        assert_eq!(
            id.archive_stem(Naming::Hyphenated.style()),
            "bigger-train-stations_1.0-beta2"
        );
    }

    #[test]
    fn test_render_stem() {
        let style = Naming::Hyphenated.style();
        let stem = demo().render_stem("$NAME-v$VERSION-by-$AUTHOR", style);
        assert_eq!(stem, "demo-mod-v1.0-by-klamann");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Naming::from_name("authored"), Some(Naming::Authored));
        assert_eq!(Naming::from_name("hyphenated"), Some(Naming::Hyphenated));
        assert_eq!(Naming::from_name("dashed"), None);
    }
}
