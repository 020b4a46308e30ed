//! Entity and relation id mapping rebuilt from the labeled triples file.
//!
//! Ids follow the training pipeline's convention: unique labels sorted lexicographically, numbered
//! from zero in that order. Entities collect both heads and tails.

use std::{
	collections::{BTreeSet, HashMap},
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

use sage_domain::NodeId;

use crate::{Error, Result};

const HEAD_COLUMN: &str = "Head";
const RELATION_COLUMN: &str = "Relation";
const TAIL_COLUMN: &str = "Tail";

#[derive(Debug, Default)]
pub struct Vocabulary {
	entities: Vec<String>,
	entity_ids: HashMap<String, usize>,
	relations: Vec<String>,
	relation_ids: HashMap<String, usize>,
	triple_count: usize,
}
impl Vocabulary {
	pub fn load(path: &Path) -> Result<Self> {
		let file =
			File::open(path).map_err(|err| Error::Read { path: path.to_path_buf(), source: err })?;

		Self::from_reader(BufReader::new(file))
	}

	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
		let headers = reader.headers()?.clone();
		let column = |name: &str| {
			headers.iter().position(|header| header.trim() == name).ok_or_else(|| {
				Error::InvalidArtifact {
					message: format!("Triples file is missing the {name} column."),
				}
			})
		};
		let (head_idx, relation_idx, tail_idx) =
			(column(HEAD_COLUMN)?, column(RELATION_COLUMN)?, column(TAIL_COLUMN)?);
		let mut triples = Vec::new();

		for record in reader.records() {
			let record = record?;
			let cell = |idx: usize| record.get(idx).unwrap_or_default();

			triples.push((
				canonical_label(cell(head_idx)),
				cell(relation_idx).trim().to_string(),
				canonical_label(cell(tail_idx)),
			));
		}

		Ok(Self::from_labeled_triples(triples))
	}

	pub fn from_labeled_triples<I>(triples: I) -> Self
	where
		I: IntoIterator<Item = (String, String, String)>,
	{
		let mut entities = BTreeSet::new();
		let mut relations = BTreeSet::new();
		let mut triple_count = 0;

		for (head, relation, tail) in triples {
			entities.insert(head);
			entities.insert(tail);
			relations.insert(relation);

			triple_count += 1;
		}

		let entities: Vec<String> = entities.into_iter().collect();
		let relations: Vec<String> = relations.into_iter().collect();

		Self {
			entity_ids: index_labels(&entities),
			relation_ids: index_labels(&relations),
			entities,
			relations,
			triple_count,
		}
	}

	pub fn entity_id(&self, label: &str) -> Option<usize> {
		self.entity_ids.get(label).copied()
	}

	pub fn relation_id(&self, label: &str) -> Option<usize> {
		self.relation_ids.get(label).copied()
	}

	pub fn contains_entity(&self, label: &str) -> bool {
		self.entity_ids.contains_key(label)
	}

	pub fn contains_relation(&self, label: &str) -> bool {
		self.relation_ids.contains_key(label)
	}

	/// Entity labels in id order.
	pub fn entities(&self) -> &[String] {
		&self.entities
	}

	/// Relation labels in id order.
	pub fn relations(&self) -> &[String] {
		&self.relations
	}

	pub fn entity_count(&self) -> usize {
		self.entities.len()
	}

	pub fn relation_count(&self) -> usize {
		self.relations.len()
	}

	pub fn triple_count(&self) -> usize {
		self.triple_count
	}
}

/// Converts a triples-file cell into a flat vocabulary label.
///
/// Cells written as tuple literals are canonicalized through [`NodeId`]. Anything else is taken
/// as an already-flat label.
pub fn canonical_label(cell: &str) -> String {
	let cell = cell.trim();

	if !cell.starts_with('(') {
		return cell.to_string();
	}

	match NodeId::parse_literal(cell) {
		Ok(node) => node.label(),
		Err(err) => {
			tracing::warn!(error = %err, cell, "Keeping unparsable node literal verbatim.");

			cell.to_string()
		},
	}
}

fn index_labels(labels: &[String]) -> HashMap<String, usize> {
	labels.iter().enumerate().map(|(idx, label)| (label.clone(), idx)).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn canonicalizes_literals_and_keeps_flat_labels() {
		assert_eq!(canonical_label(" ('recipe', 38) "), "recipe_38");
		assert_eq!(canonical_label("ingredient_tomato"), "ingredient_tomato");
		assert_eq!(canonical_label("('flavor', 'umami')"), "('flavor', 'umami')");
	}

	#[test]
	fn assigns_sorted_ids() {
		let vocabulary = Vocabulary::from_labeled_triples(vec![
			("recipe_2".to_string(), "hasDietType".to_string(), "diet_type_Vegan".to_string()),
			("recipe_1".to_string(), "containsIngredient".to_string(), "ingredient_egg".to_string()),
			("recipe_1".to_string(), "hasDietType".to_string(), "diet_type_Vegan".to_string()),
		]);

		assert_eq!(vocabulary.entities(), &[
			"diet_type_Vegan".to_string(),
			"ingredient_egg".to_string(),
			"recipe_1".to_string(),
			"recipe_2".to_string(),
		]);
		assert_eq!(vocabulary.relation_id("containsIngredient"), Some(0));
		assert_eq!(vocabulary.relation_id("hasDietType"), Some(1));
		assert_eq!(vocabulary.triple_count(), 3);
	}
}
