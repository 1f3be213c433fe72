//! `catalog.toml` manifest: the countries, competitions and asset paths behind [`LocalBackend`](super::LocalBackend).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::state::types::{Competition, Country};

/// One row of `catalog.toml`: a competition, its country and the asset paths.
///
/// Paths are relative to the manifest's directory unless absolute.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Country display name; rows with the same trimmed name share a country.
    pub country: String,
    /// Competition display name.
    pub competition: String,
    /// SVG flag of the country.
    pub country_flag: PathBuf,
    /// Logo of the competition.
    pub competition_logo: PathBuf,
    /// Scoreboard overlay file installed into the game.
    pub file: PathBuf,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default, rename = "entry")]
    entries: Vec<ManifestEntry>,
}

#[derive(Clone, Debug)]
struct CatalogCountry {
    id: i32,
    name: String,
    flag: PathBuf,
}

#[derive(Clone, Debug)]
struct CatalogCompetition {
    id: i32,
    country_id: i32,
    name: String,
    logo: PathBuf,
    file: PathBuf,
}

/// In-memory index of a catalog manifest.
///
/// Country ids are assigned from 1 in order of first appearance; competition
/// ids from 1 in manifest order. Image files are read on demand.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    countries: Vec<CatalogCountry>,
    competitions: Vec<CatalogCompetition>,
}

/// What: Read an image file, degrading to an empty blob.
///
/// Inputs:
/// - `path`: Image location.
///
/// Output:
/// - File content, or an empty vector when unreadable (the UI shows a placeholder).
fn read_image(path: &Path) -> Vec<u8> {
    match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "[Catalog] image unreadable");
            Vec::new()
        }
    }
}

impl Catalog {
    /// What: Load and index a manifest file.
    ///
    /// Inputs:
    /// - `path`: Location of `catalog.toml`.
    ///
    /// Output:
    /// - `Ok(Catalog)` or an error message naming the file.
    ///
    /// # Errors
    /// - The file cannot be read or is not a valid manifest.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Cannot read catalog '{}': {e}", path.display()))?;
        let root = path.parent().unwrap_or_else(|| Path::new("."));
        let catalog = Self::from_toml(&content, root)
            .map_err(|e| format!("Invalid catalog '{}': {e}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            countries = catalog.countries.len(),
            competitions = catalog.competitions.len(),
            "[Catalog] loaded"
        );
        Ok(catalog)
    }

    /// What: Index manifest text.
    ///
    /// Inputs:
    /// - `content`: TOML manifest with `[[entry]]` tables.
    /// - `root`: Directory relative asset paths are resolved against.
    ///
    /// Output:
    /// - Indexed catalog; blank country or competition names are skipped with a warning.
    ///
    /// # Errors
    /// - The TOML does not parse into the manifest shape.
    pub fn from_toml(content: &str, root: &Path) -> Result<Self, String> {
        let manifest: Manifest = toml::from_str(content).map_err(|e| e.to_string())?;
        let mut catalog = Self::default();
        let mut country_ids: HashMap<String, i32> = HashMap::new();
        for entry in manifest.entries {
            let country_name = entry.country.trim().to_string();
            let competition_name = entry.competition.trim().to_string();
            if country_name.is_empty() || competition_name.is_empty() {
                tracing::warn!(?entry, "[Catalog] skipping entry with blank name");
                continue;
            }
            let country_id = if let Some(id) = country_ids.get(&country_name) {
                *id
            } else {
                let id = i32::try_from(catalog.countries.len() + 1).map_err(|e| e.to_string())?;
                catalog.countries.push(CatalogCountry {
                    id,
                    name: country_name.clone(),
                    flag: root.join(&entry.country_flag),
                });
                country_ids.insert(country_name, id);
                id
            };
            let id = i32::try_from(catalog.competitions.len() + 1).map_err(|e| e.to_string())?;
            catalog.competitions.push(CatalogCompetition {
                id,
                country_id,
                name: competition_name,
                logo: root.join(&entry.competition_logo),
                file: root.join(&entry.file),
            });
        }
        Ok(catalog)
    }

    /// Countries ordered by name, with flags read from disk.
    #[must_use]
    pub fn countries(&self) -> Vec<Country> {
        let mut out: Vec<Country> = self
            .countries
            .iter()
            .map(|c| Country {
                id: c.id,
                name: c.name.clone(),
                flag_blob: read_image(&c.flag),
            })
            .collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }

    /// Competitions of `country_id` ordered by name, with logos read from disk.
    #[must_use]
    pub fn competitions_of(&self, country_id: i32) -> Vec<Competition> {
        let mut out: Vec<Competition> = self
            .competitions
            .iter()
            .filter(|c| c.country_id == country_id)
            .map(|c| Competition {
                id: c.id,
                name: c.name.clone(),
                logo_blob: read_image(&c.logo),
            })
            .collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }

    /// Location of the scoreboard file for a competition.
    #[must_use]
    pub fn scoreboard_file(&self, competition_id: i32) -> Option<&Path> {
        self.competitions
            .iter()
            .find(|c| c.id == competition_id)
            .map(|c| c.file.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
[[entry]]
country = "Argentina"
competition = "Liga Profesional"
country_flag = "flags/arg.svg"
competition_logo = "logos/lpf.png"
file = "files/lpf.big"

[[entry]]
country = " Argentina "
competition = "Copa Argentina"
country_flag = "flags/arg.svg"
competition_logo = "logos/copa.png"
file = "files/copa.big"

[[entry]]
country = "Brasil"
competition = "Brasileirão"
country_flag = "flags/bra.svg"
competition_logo = "logos/bra.png"
file = "files/bra.big"
"#;

    #[test]
    /// What: Countries are deduplicated by trimmed name and ids follow first appearance.
    ///
    /// Inputs:
    /// - Manifest with two Argentina rows and one Brasil row.
    ///
    /// Output:
    /// - Two countries; competitions grouped and sorted by name.
    fn from_toml_groups_competitions_by_country() {
        let root = Path::new("/nonexistent");
        let catalog = Catalog::from_toml(MANIFEST, root).expect("valid manifest");
        let countries = catalog.countries();
        assert_eq!(
            countries.iter().map(|c| (c.id, c.name.as_str())).collect::<Vec<_>>(),
            vec![(1, "Argentina"), (2, "Brasil")]
        );
        // Missing image files degrade to empty blobs
        assert!(countries[0].flag_blob.is_empty());

        let arg = catalog.competitions_of(1);
        assert_eq!(
            arg.iter().map(|c| (c.id, c.name.as_str())).collect::<Vec<_>>(),
            vec![(2, "Copa Argentina"), (1, "Liga Profesional")]
        );
        assert_eq!(
            catalog.scoreboard_file(3),
            Some(root.join("files/bra.big").as_path())
        );
        assert!(catalog.scoreboard_file(99).is_none());
    }

    #[test]
    /// What: Invalid TOML is reported as an error, not a panic.
    ///
    /// Inputs:
    /// - Entry missing required keys.
    ///
    /// Output:
    /// - `Err` with a message.
    fn from_toml_rejects_incomplete_entries() {
        let err = Catalog::from_toml("[[entry]]\ncountry = \"X\"\n", Path::new("."));
        assert!(err.is_err());
    }

    #[test]
    /// What: An empty manifest yields an empty catalog.
    ///
    /// Inputs:
    /// - Empty string.
    ///
    /// Output:
    /// - No countries.
    fn from_toml_accepts_empty_manifest() {
        let catalog = Catalog::from_toml("", Path::new(".")).expect("empty manifest");
        assert!(catalog.countries().is_empty());
    }
}
