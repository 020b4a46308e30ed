use serde_json::Value;

use sage_config::Dataset;
use sage_domain::RecipeId;
use sage_storage::{Error, RecipeStore};

const RECIPES_CSV: &str = "\
RecipeId,Name,Cooking_Method,CuisineRegion,BestUsdaIngredientName,Calories
38,Low-Fat Berry Blue Frozen Dessert,Freeze,,blueberries; sugar; yogurt,170.9
39,Biryani,Simmer,South Asia,rice;onion;sugar,1110.7
40,Best Lemonade,,Unknown Region,lemon;sugar;water,311.1
oops,Broken Row,Bake,,flour,10
38,Duplicate Dessert,Bake,,salt,1
";

fn store() -> RecipeStore {
	RecipeStore::from_reader(RECIPES_CSV.as_bytes(), &Dataset::default())
		.expect("Dataset must load.")
}

#[test]
fn looks_up_records_by_id() {
	let store = store();
	let record = store.get(RecipeId::new(39)).expect("Recipe 39 must exist.");

	assert_eq!(store.len(), 3);
	assert_eq!(record.attributes["Name"], "Biryani");
	assert_eq!(record.attributes["RecipeId"], 39);
	assert_eq!(record.attributes["Calories"], 1110.7);
}

#[test]
fn absent_record_differs_from_missing_attribute() {
	let store = store();
	let record = store.get(RecipeId::new(38)).expect("Recipe 38 must exist.");

	assert!(store.get(RecipeId::new(999)).is_none());
	assert_eq!(record.attributes.get("CuisineRegion"), Some(&Value::Null));
	assert!(record.attribute("CuisineRegion").is_none());
	assert!(record.attribute("Name").is_some());
}

#[test]
fn keeps_first_row_for_duplicate_ids() {
	let store = store();
	let record = store.get(RecipeId::new(38)).expect("Recipe 38 must exist.");

	assert_eq!(record.attributes["Name"], "Low-Fat Berry Blue Frozen Dessert");
}

#[test]
fn record_serializes_as_flat_object() {
	let store = store();
	let record = store.get(RecipeId::new(40)).expect("Recipe 40 must exist.");
	let json = serde_json::to_value(record).expect("Record must serialize.");

	assert_eq!(json["Name"], "Best Lemonade");
	assert_eq!(json["Cooking_Method"], Value::Null);
	assert!(json.get("recipe_id").is_none());
}

#[test]
fn ingredient_catalogue_counts_every_row() {
	let store = store();

	assert_eq!(store.unique_ingredients(), &[
		"sugar".to_string(),
		"blueberries".to_string(),
		"flour".to_string(),
		"lemon".to_string(),
		"onion".to_string(),
		"rice".to_string(),
		"salt".to_string(),
		"water".to_string(),
		"yogurt".to_string(),
	]);
}

#[test]
fn custom_columns_are_respected() {
	let dataset = Dataset {
		recipe_id_column: "id".to_string(),
		ingredient_column: "items".to_string(),
		ingredient_delimiter: "|".to_string(),
	};
	let store = RecipeStore::from_reader("id,items\n7,egg|milk\n8,egg\n".as_bytes(), &dataset)
		.expect("Dataset must load.");

	assert!(store.contains(RecipeId::new(7)));
	assert_eq!(store.unique_ingredients(), &["egg".to_string(), "milk".to_string()]);
}

#[test]
fn missing_ingredient_column_yields_empty_catalogue() {
	let store = RecipeStore::from_reader("RecipeId,Name\n1,Toast\n".as_bytes(), &Dataset::default())
		.expect("Dataset must load.");

	assert_eq!(store.len(), 1);
	assert!(store.unique_ingredients().is_empty());
}

#[test]
fn missing_id_column_is_rejected() {
	let err = RecipeStore::from_reader("Name\nToast\n".as_bytes(), &Dataset::default())
		.expect_err("Dataset without ids must fail.");

	assert!(matches!(err, Error::InvalidDataset(_)), "Unexpected error: {err:?}");
}

#[test]
fn float_formatted_keys_are_accepted() {
	let store = RecipeStore::from_reader("RecipeId,Name\n12.0,Soup\n".as_bytes(), &Dataset::default())
		.expect("Dataset must load.");

	assert!(store.contains(RecipeId::new(12)));
}
