// tests/filters.rs
use fbstats_scrape::browser::fake::{FakeBrowser, FakeElement, TableFixture};
use fbstats_scrape::config::options::{AgeFilter, DetailedFilters, League, ScrapeOptions, StatFilter};
use fbstats_scrape::config::page_map::{PageMap, fill};
use fbstats_scrape::config::settings::{Settings, Timeouts};
use fbstats_scrape::progress::NullProgress;
use fbstats_scrape::scrape::ScrapeError;
use fbstats_scrape::{runner, specs};

fn offline() -> Settings {
    Settings { timeouts: Timeouts::immediate(), ..Settings::default() }
}

fn loc(template: &str, key: &str, value: &str) -> String {
    fill(template, &[(key, value)])
}

/// Season picker plus every control of both filter forms.
fn with_controls(fake: &mut FakeBrowser, map: &PageMap, season: &str) {
    fake.insert_shared(loc(&map.season_dropdown, "season", &map.current_season), FakeElement::button());
    fake.insert_shared(loc(&map.season_option, "season", season), FakeElement::button());

    for tab in ["summary", "attack", "defence", "passing", "goalkeeper"] {
        fake.insert_shared(loc(&map.preset_tab, "tab", tab), FakeElement::button());
    }
    fake.insert_shared(map.detailed_tab.clone(), FakeElement::button());
    for v in ["Overall", "Home", "Away"] {
        fake.insert_shared(loc(&map.venue_option, "venue", v), FakeElement::button());
    }
    fake.insert_shared(map.age_dropdown.clone(), FakeElement::button());
    for k in ["More than", "Equals", "Less than"] {
        fake.insert_shared(loc(&map.age_option, "age_type", k), FakeElement::button());
    }
    fake.insert_shared(map.age_input.clone(), FakeElement::default());
    for p in ["G", "D", "M", "F"] {
        fake.insert_shared(loc(&map.position_toggle, "position", p), FakeElement::button());
    }
    for i in 1..=5 {
        fake.insert_shared(loc(&map.filter_category, "index", &i.to_string()), FakeElement::button());
    }
    for s in ["Goals", "Shots on target", "Total shots", "Rating", "Assists", "Big chances created", "Tackles"] {
        fake.insert_shared(loc(&map.sub_filter_option, "sub_filter", s), FakeElement::button());
    }
    fake.insert_shared(map.apply_filters.clone(), FakeElement::button());
}

fn controls_only(map: &PageMap) -> FakeBrowser {
    let mut fake = FakeBrowser::new();
    with_controls(&mut fake, map, "21/22");
    fake
}

#[test]
fn open_page_visits_league_and_picks_season() {
    let settings = offline();
    let map = &settings.pages;
    let mut fake = controls_only(map);

    specs::open_page(&mut fake, &settings, League::SerieA, "21/22").unwrap();

    assert_eq!(fake.visited, vec![League::SerieA.url()]);
    assert_eq!(
        fake.clicks,
        vec![
            loc(&map.season_dropdown, "season", &map.current_season),
            loc(&map.season_option, "season", "21/22"),
        ]
    );
}

#[test]
fn unknown_season_surfaces_as_lookup_failure() {
    let settings = offline();
    let mut fake = controls_only(&settings.pages);
    let err = specs::open_page(&mut fake, &settings, League::Ucl, "1999/00").unwrap_err();
    assert!(matches!(err, ScrapeError::Browser(ref e) if e.is_timeout()), "{err}");
}

#[test]
fn preset_tab_is_clicked_by_lowercase_id_after_scrolling() {
    let settings = offline();
    let map = &settings.pages;
    let mut fake = controls_only(map);

    specs::apply_preset_filter(&mut fake, &settings, "Defence").unwrap();

    assert_eq!(fake.scripts, vec![map.scroll_script.clone()]);
    assert_eq!(fake.clicks, vec![loc(&map.preset_tab, "tab", "defence")]);
}

#[test]
fn current_view_touches_nothing() {
    let settings = offline();
    let mut fake = controls_only(&settings.pages);
    specs::apply_filter(&mut fake, &settings, &StatFilter::Current).unwrap();
    assert!(fake.clicks.is_empty() && fake.scripts.is_empty());
}

#[test]
fn detailed_form_clicks_in_order() {
    let settings = offline();
    let map = &settings.pages;
    let mut fake = controls_only(map);
    // Two chips left over from the site's default selection.
    fake.insert_shared(map.active_sub_filter.clone(), FakeElement::chips(2));

    let d = DetailedFilters {
        venue: String::from("Away"),
        age: AgeFilter::LessThan(23),
        positions: vec![String::from("M"), String::from("F")],
        category: String::from("Passing"),
        sub_filters: vec![String::from("Assists"), String::from("Big chances created")],
    };
    specs::apply_detailed_filters(&mut fake, &settings, &d).unwrap();

    assert_eq!(fake.scripts, vec![map.scroll_script.clone()]);
    assert_eq!(
        fake.clicks,
        vec![
            map.detailed_tab.clone(),
            loc(&map.venue_option, "venue", "Away"),
            map.age_dropdown.clone(),
            loc(&map.age_option, "age_type", "Less than"),
            loc(&map.position_toggle, "position", "G"),
            loc(&map.position_toggle, "position", "D"),
            map.active_sub_filter.clone(),
            map.active_sub_filter.clone(),
            loc(&map.filter_category, "index", "3"),
            loc(&map.sub_filter_option, "sub_filter", "Assists"),
            loc(&map.sub_filter_option, "sub_filter", "Big chances created"),
            map.apply_filters.clone(),
        ]
    );
    assert_eq!(fake.typed, vec![(map.age_input.clone(), String::from("23"))]);
}

#[test]
fn detailed_form_skips_age_when_all_and_caps_sub_filters() {
    let settings = offline();
    let map = &settings.pages;
    let mut fake = controls_only(map);

    let d = DetailedFilters {
        sub_filters: ["Goals", "Shots on target", "Total shots", "Rating", "Assists", "Tackles"]
            .iter()
            .map(|s| String::from(*s))
            .collect(),
        ..DetailedFilters::default()
    };
    specs::apply_detailed_filters(&mut fake, &settings, &d).unwrap();

    assert_eq!(fake.clicks_on(&map.age_dropdown), 0);
    assert!(fake.typed.is_empty());
    assert_eq!(fake.clicks_on(&loc(&map.sub_filter_option, "sub_filter", "Assists")), 1);
    assert_eq!(fake.clicks_on(&loc(&map.sub_filter_option, "sub_filter", "Tackles")), 0);
    // All four positions stay selected: no toggles.
    assert!(fake.clicks.iter().all(|c| !c.contains("checkbox-")));
}

#[test]
fn unknown_category_is_rejected_before_any_click() {
    let settings = offline();
    let mut fake = controls_only(&settings.pages);
    let d = DetailedFilters { category: String::from("Set pieces"), ..DetailedFilters::default() };

    let err = specs::apply_detailed_filters(&mut fake, &settings, &d).unwrap_err();
    assert!(matches!(err, ScrapeError::UnknownInput { .. }), "{err}");
    assert!(fake.clicks.is_empty());
}

#[test]
fn stuck_chip_is_bounded() {
    let settings = offline();
    let map = &settings.pages;
    let mut fake = controls_only(map);
    // A chip that never goes away.
    fake.insert_shared(map.active_sub_filter.clone(), FakeElement::button());

    let err = specs::apply_detailed_filters(&mut fake, &settings, &DetailedFilters::default()).unwrap_err();
    assert!(matches!(err, ScrapeError::Browser(_)), "{err}");
    assert_eq!(fake.clicks_on(&map.active_sub_filter), 32);
}

#[test]
fn collect_runs_navigation_filters_and_every_page() {
    let settings = offline();
    let map = &settings.pages;
    let mut fake = TableFixture::new(map, &["Goals", "Assists", "Rating"])
        .generated_page(20)
        .generated_page(20)
        .generated_page(7)
        .build();
    with_controls(&mut fake, map, "22/23");

    let options = ScrapeOptions {
        league: League::Bundesliga,
        season: String::from("22/23"),
        filter: StatFilter::Preset(String::from("Attack")),
    };
    let ds = runner::collect(&mut fake, &settings, &options, &mut NullProgress).unwrap();

    assert_eq!(fake.visited, vec![League::Bundesliga.url()]);
    assert_eq!(ds.row_count(), 47);
    assert_eq!(ds.header_count(), 5);
    assert_eq!(fake.clicks_on(&map.next_page), 2);
    assert_eq!(fake.clicks_on(&loc(&map.preset_tab, "tab", "attack")), 1);
}
