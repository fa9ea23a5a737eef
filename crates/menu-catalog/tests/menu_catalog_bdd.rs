//! Behavioural tests for the menu catalog.
//!
//! These scenarios exercise the add-and-filter flow end to end: seeding,
//! validation, appending, and course filtering.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use menu_catalog::{
    CandidateFields, Catalog, Course, CourseSelection, ItemIdGenerator, MenuItem, MenuItemId,
    PricePolicy, ValidationError, default_menu, filter, validate,
};
use mockable::DefaultClock;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

struct CatalogWorld {
    catalog: RefCell<Catalog>,
    ids: ItemIdGenerator,
    policy: Cell<PricePolicy>,
    outcome: RefCell<Option<Result<MenuItemId, ValidationError>>>,
    observed: Rc<RefCell<Vec<String>>>,
}

impl CatalogWorld {
    fn new() -> Self {
        Self {
            catalog: RefCell::new(Catalog::new()),
            ids: ItemIdGenerator::new(Arc::new(DefaultClock)),
            policy: Cell::new(PricePolicy::NonNegative),
            outcome: RefCell::new(None),
            observed: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn submit(&self, name: &str, price: &str, course: Option<Course>) {
        let fields = CandidateFields {
            name: name.to_owned(),
            description: format!("House {name}"),
            price_text: price.to_owned(),
            course,
        };
        let result = validate(&fields, self.policy.get(), &self.ids).map(|item| {
            let id = item.id().clone();
            self.catalog.borrow_mut().append(item);
            id
        });
        *self.outcome.borrow_mut() = Some(result);
    }

    fn outcome(&self) -> Result<MenuItemId, ValidationError> {
        self.outcome
            .borrow()
            .clone()
            .expect("a submission should have been made")
    }
}

fn seed_catalog(world: &CatalogWorld) {
    *world.catalog.borrow_mut() = Catalog::from_items(default_menu());
}

fn parse_course(label: &str) -> Course {
    label.parse().expect("known course label")
}

#[fixture]
fn world() -> CatalogWorld {
    CatalogWorld::new()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("the seeded catalog")]
fn the_seeded_catalog(world: &CatalogWorld) {
    seed_catalog(world);
}

#[given("the seeded catalog with the strict price policy")]
fn the_seeded_catalog_with_the_strict_price_policy(world: &CatalogWorld) {
    seed_catalog(world);
    world.policy.set(PricePolicy::StrictlyPositive);
}

#[given("an append listener")]
fn an_append_listener(world: &CatalogWorld) {
    let sink = Rc::clone(&world.observed);
    world
        .catalog
        .borrow_mut()
        .subscribe(move |item: &MenuItem| sink.borrow_mut().push(item.name().to_owned()));
}

// ============================================================================
// When steps
// ============================================================================

#[when("\"{name}\" is submitted as \"{course}\" priced \"{price}\"")]
fn a_dish_is_submitted(world: &CatalogWorld, name: String, course: String, price: String) {
    world.submit(&name, &price, Some(parse_course(&course)));
}

#[when("\"{name}\" is submitted without a course priced \"{price}\"")]
fn a_dish_is_submitted_without_a_course(world: &CatalogWorld, name: String, price: String) {
    world.submit(&name, &price, None);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the submission is accepted")]
fn the_submission_is_accepted(world: &CatalogWorld) {
    let outcome = world.outcome();
    assert!(outcome.is_ok(), "expected acceptance, got {outcome:?}");
}

#[then("the submission is rejected with \"{message}\"")]
fn the_submission_is_rejected_with(world: &CatalogWorld, message: String) {
    match world.outcome() {
        Err(error) => assert_eq!(error.to_string(), message),
        Ok(id) => panic!("expected rejection, item {id} was admitted"),
    }
}

#[then("filtering by \"{selection}\" yields a count of {count}")]
fn filtering_yields_a_count_of(world: &CatalogWorld, selection: String, count: usize) {
    let selected: CourseSelection = selection.parse().expect("known selection");
    let catalog = world.catalog.borrow();
    let view = filter(catalog.list(), selected);

    assert_eq!(view.len(), count);
    assert!(view.iter().all(|item| selected.matches(item.course())));
}

#[then("the catalog holds {count} items")]
fn the_catalog_holds_items(world: &CatalogWorld, count: usize) {
    assert_eq!(world.catalog.borrow().len(), count);
}

#[then("the last dish is named \"{name}\"")]
fn the_last_dish_is_named(world: &CatalogWorld, name: String) {
    let catalog = world.catalog.borrow();
    let last = catalog.list().last().expect("catalog should not be empty");

    assert_eq!(last.name(), name);
    let outcome = world.outcome().expect("last submission accepted");
    assert_eq!(last.id(), &outcome);
}

#[then("the \"{course}\" dishes are \"{names}\"")]
fn the_course_dishes_are(world: &CatalogWorld, course: String, names: String) {
    let catalog = world.catalog.borrow();
    let view = filter(catalog.list(), CourseSelection::Course(parse_course(&course)));
    let actual: Vec<&str> = view.iter().map(|item| item.name()).collect();
    let expected: Vec<&str> = names.split(", ").collect();

    assert_eq!(actual, expected);
}

#[then("the listener saw \"{name}\"")]
fn the_listener_saw(world: &CatalogWorld, name: String) {
    assert_eq!(*world.observed.borrow(), [name]);
}

#[then("the catalog revision is {revision}")]
fn the_catalog_revision_is(world: &CatalogWorld, revision: u64) {
    assert_eq!(world.catalog.borrow().revision(), revision);
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/menu_catalog.feature",
    name = "Each seeded course holds exactly one dish"
)]
fn each_seeded_course_holds_exactly_one_dish(world: CatalogWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/menu_catalog.feature",
    name = "Adding a dish to an existing course"
)]
fn adding_a_dish_to_an_existing_course(world: CatalogWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/menu_catalog.feature",
    name = "Filtering keeps insertion order"
)]
fn filtering_keeps_insertion_order(world: CatalogWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/menu_catalog.feature",
    name = "Rejecting a dish with a non-numeric price"
)]
fn rejecting_a_dish_with_a_non_numeric_price(world: CatalogWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/menu_catalog.feature",
    name = "Rejecting a dish with a negative price"
)]
fn rejecting_a_dish_with_a_negative_price(world: CatalogWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/menu_catalog.feature",
    name = "Rejecting a dish without a course"
)]
fn rejecting_a_dish_without_a_course(world: CatalogWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/menu_catalog.feature",
    name = "Rejecting zero prices under the strict policy"
)]
fn rejecting_zero_prices_under_the_strict_policy(world: CatalogWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/menu_catalog.feature",
    name = "Listeners observe appended dishes"
)]
fn listeners_observe_appended_dishes(world: CatalogWorld) {
    drop(world);
}
