/// One scored head entity returned by a link-prediction query.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionRow {
	pub head_label: String,
	pub raw_score: f32,
}
impl PredictionRow {
	pub fn new(head_label: impl Into<String>, raw_score: f32) -> Self {
		Self { head_label: head_label.into(), raw_score }
	}
}
