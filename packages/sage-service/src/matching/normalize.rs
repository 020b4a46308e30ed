use sage_domain::PredictionRow;

/// Min-max rescales one query's scores into `[0, 1]`.
///
/// A zero range (all scores equal, including a single row) maps every row to `0.0`.
pub fn normalize(rows: Vec<PredictionRow>) -> Vec<(String, f32)> {
	let Some(first) = rows.first() else { return Vec::new() };
	let (min, max) = rows.iter().fold((first.raw_score, first.raw_score), |(min, max), row| {
		(min.min(row.raw_score), max.max(row.raw_score))
	});
	// f64 keeps `max - min` finite for extreme f32 inputs.
	let (min, range) = (f64::from(min), f64::from(max) - f64::from(min));

	rows.into_iter()
		.map(|row| {
			let score =
				if range > 0.0 { ((f64::from(row.raw_score) - min) / range) as f32 } else { 0.0 };

			(row.head_label, score)
		})
		.collect()
}
