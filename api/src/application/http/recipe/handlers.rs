pub mod get_recipe;
