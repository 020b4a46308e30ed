//! Triple plausibility functions. Higher is more plausible for every variant.
//!
//! RotatE and ComplEx read vectors as interleaved `(re, im)` pairs, so their dimension must be even.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringFunction {
	/// `-||h + r - t||`
	#[serde(rename = "transe")]
	TransE,
	/// `<h, r, t>`
	#[serde(rename = "distmult")]
	DistMult,
	/// `-||h ∘ r - t||` in complex space.
	#[serde(rename = "rotate")]
	RotatE,
	/// `Re(<h, r, conj(t)>)`
	#[serde(rename = "complex")]
	ComplEx,
}
impl ScoringFunction {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::TransE => "transe",
			Self::DistMult => "distmult",
			Self::RotatE => "rotate",
			Self::ComplEx => "complex",
		}
	}

	pub fn requires_even_dim(self) -> bool {
		matches!(self, Self::RotatE | Self::ComplEx)
	}

	pub fn score(self, head: &[f32], relation: &[f32], tail: &[f32]) -> f32 {
		match self {
			Self::TransE => score_transe(head, relation, tail),
			Self::DistMult => score_distmult(head, relation, tail),
			Self::RotatE => score_rotate(head, relation, tail),
			Self::ComplEx => score_complex(head, relation, tail),
		}
	}
}

fn score_transe(head: &[f32], relation: &[f32], tail: &[f32]) -> f32 {
	let sum_sq: f32 = head
		.iter()
		.zip(relation)
		.zip(tail)
		.map(|((h, r), t)| {
			let diff = h + r - t;

			diff * diff
		})
		.sum();

	-sum_sq.sqrt()
}

fn score_distmult(head: &[f32], relation: &[f32], tail: &[f32]) -> f32 {
	head.iter().zip(relation).zip(tail).map(|((h, r), t)| h * r * t).sum()
}

fn score_rotate(head: &[f32], relation: &[f32], tail: &[f32]) -> f32 {
	let sum_sq: f32 = complex_pairs(head, relation, tail)
		.map(|((h_re, h_im), (r_re, r_im), (t_re, t_im))| {
			let diff_re = h_re * r_re - h_im * r_im - t_re;
			let diff_im = h_re * r_im + h_im * r_re - t_im;

			diff_re * diff_re + diff_im * diff_im
		})
		.sum();

	-sum_sq.sqrt()
}

fn score_complex(head: &[f32], relation: &[f32], tail: &[f32]) -> f32 {
	complex_pairs(head, relation, tail)
		.map(|((h_re, h_im), (r_re, r_im), (t_re, t_im))| {
			let x = h_re * r_re - h_im * r_im;
			let y = h_re * r_im + h_im * r_re;

			x * t_re + y * t_im
		})
		.sum()
}

type Complex = (f32, f32);

fn complex_pairs<'a>(
	head: &'a [f32],
	relation: &'a [f32],
	tail: &'a [f32],
) -> impl Iterator<Item = (Complex, Complex, Complex)> + 'a {
	let pair = |chunk: &[f32]| (chunk[0], chunk[1]);

	head.chunks_exact(2)
		.zip(relation.chunks_exact(2))
		.zip(tail.chunks_exact(2))
		.map(move |((h, r), t)| (pair(h), pair(r), pair(t)))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn transe_is_zero_for_exact_translation() {
		let (head, relation, tail) = ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]);
		let score = ScoringFunction::TransE.score(&head, &relation, &tail);

		assert!(score.abs() < 1e-6);
		assert!(ScoringFunction::TransE.score(&[0.0], &[0.0], &[3.0]) < score);
	}

	#[test]
	fn distmult_is_trilinear_product() {
		let (head, relation, tail) = ([1.0, 0.5, 0.0], [1.0, 1.0, 1.0], [0.5, 1.0, 0.0]);
		let score = ScoringFunction::DistMult.score(&head, &relation, &tail);

		assert!((score - 1.0).abs() < 1e-6);
	}

	#[test]
	fn rotate_matches_quarter_turn() {
		let score = ScoringFunction::RotatE.score(&[1.0, 0.0], &[0.0, 1.0], &[0.0, 1.0]);

		assert!(score.abs() < 1e-6);
	}

	#[test]
	fn complex_takes_real_part() {
		// (1 + 0i)(1 + 0i)conj(2 + 3i) = 2 - 3i
		let score = ScoringFunction::ComplEx.score(&[1.0, 0.0], &[1.0, 0.0], &[2.0, 3.0]);

		assert!((score - 2.0).abs() < 1e-6);
	}

	#[test]
	fn deserializes_lowercase_names() {
		let scoring: ScoringFunction =
			serde_json::from_str("\"rotate\"").expect("scoring name must parse");

		assert_eq!(scoring, ScoringFunction::RotatE);
		assert_eq!(scoring.as_str(), "rotate");
	}
}
