mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Artifacts, Config, Dataset, Matching, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}

	for (label, path) in [
		("artifacts.triples_path", &cfg.artifacts.triples_path),
		("artifacts.model_path", &cfg.artifacts.model_path),
		("artifacts.recipes_path", &cfg.artifacts.recipes_path),
	] {
		if path.as_os_str().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}
	for (label, value) in [
		("dataset.recipe_id_column", &cfg.dataset.recipe_id_column),
		("dataset.ingredient_column", &cfg.dataset.ingredient_column),
	] {
		if value.is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}

	if cfg.dataset.ingredient_delimiter.chars().count() != 1 {
		return Err(Error::Validation {
			message: "dataset.ingredient_delimiter must be exactly one character.".to_string(),
		});
	}
	if cfg.matching.default_top_k == 0 {
		return Err(Error::Validation {
			message: "matching.default_top_k must be greater than zero.".to_string(),
		});
	}
	if cfg.matching.max_top_k.is_some_and(|max_top_k| max_top_k < cfg.matching.default_top_k) {
		return Err(Error::Validation {
			message: "matching.max_top_k must be greater than or equal to matching.default_top_k."
				.to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.service.http_bind = cfg.service.http_bind.trim().to_string();
	cfg.dataset.recipe_id_column = cfg.dataset.recipe_id_column.trim().to_string();
	cfg.dataset.ingredient_column = cfg.dataset.ingredient_column.trim().to_string();

	for path in [
		&mut cfg.artifacts.triples_path,
		&mut cfg.artifacts.model_path,
		&mut cfg.artifacts.recipes_path,
	] {
		if let Some(raw) = path.to_str() {
			let trimmed = raw.trim();

			if trimmed.len() != raw.len() {
				*path = trimmed.into();
			}
		}
	}
}
