//! Behaviour-driven step definitions driving the swipe CLI scenarios.

use super::helpers::CatalogFixture;
use super::*;
use crate::swipe::{SwipeConfig, SwipeReport, config_from_layers_for_test, execute_swipe};
use brewmatch_core::DrinkId;
use ortho_config::MergeComposer;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Map, Value, json};
use std::cell::RefCell;

/// Aggregates swipe CLI scenario state so each step only needs a single world
/// argument.
struct SwipeWorld {
    fixture: CatalogFixture,
    cli_layer: RefCell<Map<String, Value>>,
    env_layer: RefCell<Option<Value>>,
    file_layer: RefCell<Option<Value>>,
    result: RefCell<Option<Result<SwipeReport, CliError>>>,
}

impl SwipeWorld {
    fn new() -> Self {
        Self {
            fixture: CatalogFixture::new(),
            cli_layer: RefCell::new(Map::new()),
            env_layer: RefCell::new(None),
            file_layer: RefCell::new(None),
            result: RefCell::new(None),
        }
    }

    fn set_cli(&self, key: &str, value: Value) {
        self.cli_layer.borrow_mut().insert(key.to_owned(), value);
    }

    fn assert_match(&self, name: &str, category: &str, id: u64) {
        let borrowed = self.result.borrow();
        let report = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect("expected success");
        let drink = report.outcome.drink().expect("expected a match");
        assert_eq!(drink.name, name);
        assert_eq!(drink.category.as_str(), category);
        assert_eq!(drink.id, DrinkId(id));
    }
}

#[fixture]
fn world() -> SwipeWorld {
    SwipeWorld::new()
}

#[given("a catalogue file with tea and coffee drinks")]
fn catalogue_exists(#[from(world)] world: &SwipeWorld) {
    assert!(
        world.fixture.catalog().as_std_path().is_file(),
        "expected the catalogue fixture on disk"
    );
}

#[given("the decisions \"pass,like,pass\" are passed as CLI flags")]
fn cli_decisions(#[from(world)] world: &SwipeWorld) {
    world.set_cli(ARG_DECISIONS, json!("pass,like,pass"));
}

#[given("the catalogue path is passed as a CLI flag")]
fn cli_catalogue(#[from(world)] world: &SwipeWorld) {
    world.set_cli(ARG_CATALOG, json!(world.fixture.catalog().as_str()));
}

#[given("I omit the decisions")]
fn omit_decisions(#[from(world)] world: &SwipeWorld) {
    world.cli_layer.borrow_mut().clear();
    *world.env_layer.borrow_mut() = None;
    *world.file_layer.borrow_mut() = None;
}

#[given("the configuration file sets decisions and the catalogue path")]
fn file_layer(#[from(world)] world: &SwipeWorld) {
    *world.file_layer.borrow_mut() = Some(json!({
        "decisions": "pass,pass,like",
        "catalog": world.fixture.catalog().as_str(),
    }));
}

#[given("the environment sets the decisions \"like,pass,pass\"")]
fn env_layer(#[from(world)] world: &SwipeWorld) {
    *world.env_layer.borrow_mut() = Some(json!({ "decisions": "like,pass,pass" }));
}

#[when("I run the swipe command")]
fn run_swipe_command(#[from(world)] world: &SwipeWorld) {
    let file_layer = world.file_layer.borrow().clone();
    let env_layer = world.env_layer.borrow().clone();
    let cli_layer = world.cli_layer.borrow().clone();
    let outcome = if file_layer.is_some() || env_layer.is_some() {
        merge_layers(file_layer, env_layer, cli_layer)
    } else {
        parse_invocation(&cli_layer)
    }
    .and_then(|config| {
        config.validate_sources()?;
        execute_swipe(&config)
    });
    world.result.replace(Some(outcome));
}

fn merge_layers(
    file_layer: Option<Value>,
    env_layer: Option<Value>,
    cli_layer: Map<String, Value>,
) -> Result<SwipeConfig, CliError> {
    let mut composer = MergeComposer::new();
    if let Some(file) = file_layer {
        composer.push_file(file, None);
    }
    if let Some(env) = env_layer {
        composer.push_environment(env);
    }
    composer.push_cli(Value::Object(cli_layer));
    config_from_layers_for_test(composer.layers())
}

fn parse_invocation(cli_layer: &Map<String, Value>) -> Result<SwipeConfig, CliError> {
    let mut invocation = vec!["brewmatch".to_owned(), "swipe".to_owned()];
    for (key, value) in cli_layer {
        invocation.push(format!("--{key}"));
        invocation.push(value.as_str().unwrap_or_default().to_owned());
    }
    let cli = Cli::try_parse_from(invocation).map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Swipe(args) => args.into_config(),
        other => panic!("expected the swipe command, got {other:?}"),
    }
}

#[then("the match is Cold Brew from the coffee category")]
fn matches_cold_brew(#[from(world)] world: &SwipeWorld) {
    world.assert_match("Cold Brew", "coffee", 22);
}

#[then("the match is Chai Tea Latte from the tea category")]
fn matches_chai(#[from(world)] world: &SwipeWorld) {
    world.assert_match("Chai Tea Latte", "tea", 21);
}

#[then("the CLI reports that the \"decisions\" flag is missing")]
fn reports_missing_decisions(#[from(world)] world: &SwipeWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::MissingArgument { field, env } => {
            assert_eq!(*field, ARG_DECISIONS);
            assert_eq!(*env, ENV_DECISIONS);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

macro_rules! register_swipe_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/swipe_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: SwipeWorld) {
            let _ = world;
        }
    };
}

register_swipe_scenario!(cli_flag_replay, "replaying decisions passed as CLI flags");
register_swipe_scenario!(rejecting_missing_decisions, "rejecting missing decisions");
register_swipe_scenario!(
    env_overrides_file,
    "environment values override the configuration file"
);
register_swipe_scenario!(cli_overrides_env, "CLI flags override the environment");
