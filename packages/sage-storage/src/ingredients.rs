use std::collections::HashMap;

const PLACEHOLDERS: [&str; 2] = ["unknown", "nan"];

/// Counts ingredient usage across delimited cells.
#[derive(Debug, Default)]
pub struct IngredientCounter {
	counts: HashMap<String, usize>,
}
impl IngredientCounter {
	pub fn observe(&mut self, cell: &str, delimiter: char) {
		for part in cell.split(delimiter) {
			let name = part.trim();

			if name.is_empty() || PLACEHOLDERS.iter().any(|p| name.eq_ignore_ascii_case(p)) {
				continue;
			}

			*self.counts.entry(name.to_string()).or_insert(0) += 1;
		}
	}

	/// Distinct names, most used first, ties broken alphabetically.
	pub fn into_sorted(self) -> Vec<String> {
		let mut entries: Vec<(String, usize)> = self.counts.into_iter().collect();

		entries.sort_by(|(left_name, left_count), (right_name, right_count)| {
			right_count.cmp(left_count).then_with(|| left_name.cmp(right_name))
		});

		entries.into_iter().map(|(name, _)| name).collect()
	}
}
