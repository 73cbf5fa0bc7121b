use crate::config::Config;
use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use std::path::{Path, PathBuf};
use tracing::instrument;

const FILE_STEM: &str = "refscan";
const EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];
/// Environment variables with this prefix override file values; `__`
/// separates nested keys (`REFSCAN_SERVER__BIND`).
pub const ENV_PREFIX: &str = "REFSCAN_";

/// Loads the configuration.
///
/// Layers, later ones winning: built-in defaults, one configuration file,
/// then the environment. The file is `explicit` when given (and must exist),
/// otherwise the first of [`candidate_files`] that exists, if any.
#[instrument]
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    let file = match explicit {
        Some(path) if !path.is_file() => exn::bail!(ErrorKind::FileNotFound(path.to_path_buf())),
        Some(path) => Some(path.to_path_buf()),
        None => candidate_files().into_iter().find(|candidate| candidate.is_file()),
    };
    match &file {
        Some(path) => tracing::debug!(path = %path.display(), "Using configuration file"),
        None => tracing::debug!("No configuration file found; using defaults and environment"),
    }
    let figment = figment(file.as_deref())?;
    figment.extract::<Config>().or_raise(|| ErrorKind::Load)?.validate()
}

/// The layered provider [`load`] extracts from.
pub fn figment(file: Option<&Path>) -> Result<Figment> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));
    if let Some(path) = file {
        figment = match path.extension().and_then(|extension| extension.to_str()) {
            Some("toml") => figment.merge(Toml::file(path)),
            Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
            Some("json") => figment.merge(Json::file(path)),
            _ => exn::bail!(ErrorKind::UnsupportedFormat(path.to_path_buf())),
        };
    }
    Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
}

/// Files searched when no configuration file is named explicitly: the
/// working directory first, then the platform configuration directory.
pub fn candidate_files() -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> =
        EXTENSIONS.iter().map(|ext| PathBuf::from(format!("{FILE_STEM}.{ext}"))).collect();
    if let Some(dirs) = ProjectDirs::from("", "", FILE_STEM) {
        candidates.extend(EXTENSIONS.iter().map(|ext| dirs.config_dir().join(format!("config.{ext}"))));
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use refscan_extract::{SequenceReferences, SuperTypeFallback};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_toml_file() {
        let file = file_with(
            ".toml",
            r#"
                default_path = "/content/site"

                [repository]
                source = "/exports/site.infinity.json"
                mount = "/content/site"

                [server]
                bind = "0.0.0.0:4502"

                [extract]
                sequence_references = "element"
            "#,
        );
        let config = figment(Some(file.path())).unwrap().extract::<Config>().unwrap().validate().unwrap();
        assert_eq!(config.default_path, "/content/site");
        assert_eq!(config.repository.source, Some(PathBuf::from("/exports/site.infinity.json")));
        assert_eq!(config.repository.mount, "/content/site");
        assert_eq!(config.server.bind.port(), 4502);
        // Untouched keys keep their defaults.
        assert_eq!(config.server.route, "/bin/data-extract.json");
        assert_eq!(config.extract.sequence_references, SequenceReferences::Element);
        assert_eq!(config.extract.asset_prefix, "/content/dam");
    }

    #[test]
    fn test_yaml_and_json_files() {
        let yaml = file_with(".yaml", "extract:\n  super_type: omit\n");
        let config: Config = figment(Some(yaml.path())).unwrap().extract().unwrap();
        assert_eq!(config.extract.super_type, SuperTypeFallback::Omit);
        let json = file_with(".json", r#"{"server": {"route": "/extract.json"}}"#);
        let config: Config = figment(Some(json.path())).unwrap().extract().unwrap();
        assert_eq!(config.server.route, "/extract.json");
    }

    #[test]
    fn test_unsupported_format() {
        let file = file_with(".ini", "default_path = /content");
        let err = figment(Some(file.path())).unwrap_err();
        assert!(matches!(&*err, ErrorKind::UnsupportedFormat(_)));
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let err = load(Some(Path::new("/definitely/not/here/refscan.toml"))).unwrap_err();
        assert!(matches!(&*err, ErrorKind::FileNotFound(_)));
    }

    #[test]
    fn test_environment_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("refscan.toml", "default_path = \"/content/a\"\n[server]\nroute = \"/a.json\"")?;
            jail.set_env("REFSCAN_DEFAULT_PATH", "/content/b");
            jail.set_env("REFSCAN_EXTRACT__ASSET_PREFIX", "/content/assets");
            let config = load(None).unwrap();
            assert_eq!(config.default_path, "/content/b");
            assert_eq!(config.server.route, "/a.json");
            assert_eq!(config.extract.asset_prefix, "/content/assets");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("REFSCAN_SERVER__BIND", "not an address");
            let err = load(None).unwrap_err();
            assert!(matches!(&*err, ErrorKind::Load));
            Ok(())
        });
    }
}
