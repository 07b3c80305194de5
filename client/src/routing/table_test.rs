use super::*;

fn def(name: RouteName, pattern: &str) -> RouteDefinition {
    RouteDefinition::new(name, RoutePattern::parse(pattern).unwrap())
}

/// Every ordering of the three site routes.
fn permutations() -> Vec<Vec<RouteDefinition>> {
    let site = RouteTable::site().routes().to_vec();
    let orders = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
    orders
        .iter()
        .map(|order| order.iter().map(|&i| site[i].clone()).collect())
        .collect()
}

// =============================================================
// construction
// =============================================================

#[test]
fn site_table_passes_validation() {
    let site = RouteTable::site();
    assert_eq!(RouteTable::new(site.routes().to_vec()), Ok(site));
}

#[test]
fn rejects_duplicate_names() {
    let routes = vec![
        def(RouteName::Home, "/"),
        def(RouteName::Home, "/again"),
        def(RouteName::NotFound, "/*path"),
    ];
    assert_eq!(RouteTable::new(routes), Err(RouteTableError::Duplicate(RouteName::Home)));
}

#[test]
fn requires_home_and_not_found() {
    assert_eq!(
        RouteTable::new(vec![def(RouteName::NotFound, "/*path")]),
        Err(RouteTableError::Missing(RouteName::Home))
    );
    assert_eq!(
        RouteTable::new(vec![def(RouteName::Home, "/")]),
        Err(RouteTableError::Missing(RouteName::NotFound))
    );
}

#[test]
fn site_routes_carry_their_metadata() {
    let site = RouteTable::site();
    for route in RouteName::ALL {
        assert_eq!(site.get(route).and_then(|r| r.meta.clone()), Some(seo::for_route(route)));
    }
}

// =============================================================
// resolution
// =============================================================

#[test]
fn root_resolves_home_in_every_declaration_order() {
    for routes in permutations() {
        let table = RouteTable::new(routes).unwrap();
        for path in ["/", ""] {
            assert_eq!(table.resolve(path).name, RouteName::Home, "order {:?}", table.routes());
        }
    }
}

#[test]
fn catch_all_shadowing_root_yields_replace_correction() {
    let table = RouteTable::new(vec![def(RouteName::NotFound, "/*path"), def(RouteName::Home, "/")]).unwrap();
    let resolution = table.resolve("/");
    assert_eq!(resolution.name, RouteName::Home);
    assert_eq!(resolution.correction, Some(Correction::replace("/")));
    assert!(resolution.correction.unwrap().replaces());
}

#[test]
fn direct_root_match_needs_no_correction() {
    let resolution = RouteTable::site().resolve("/");
    assert_eq!(resolution.name, RouteName::Home);
    assert_eq!(resolution.correction, None);
}

#[test]
fn showcase_resolves_with_query_and_fragment() {
    let table = RouteTable::site();
    assert_eq!(table.resolve("/showcase").name, RouteName::Showcase);
    assert_eq!(table.resolve("/showcase#section1").name, RouteName::Showcase);
    assert_eq!(table.resolve("/showcase?ref=nav").name, RouteName::Showcase);
    assert_eq!(table.resolve("/showcase/").name, RouteName::Showcase);
}

#[test]
fn undeclared_path_resolves_not_found_with_its_metadata() {
    for routes in permutations() {
        let table = RouteTable::new(routes).unwrap();
        let resolution = table.resolve("/nonexistent-xyz");
        assert_eq!(resolution.name, RouteName::NotFound);
        assert_eq!(resolution.meta, seo::for_route(RouteName::NotFound));
        assert_eq!(resolution.remainder.as_deref(), Some("nonexistent-xyz"));
    }
}

#[test]
fn catch_all_declared_first_shadows_later_literals() {
    let table = RouteTable::new(vec![
        def(RouteName::NotFound, "/*path"),
        def(RouteName::Showcase, "/showcase"),
        def(RouteName::Home, "/"),
    ])
    .unwrap();
    assert_eq!(table.resolve("/showcase").name, RouteName::NotFound);
    assert_eq!(table.resolve("/").name, RouteName::Home);
}

#[test]
fn table_without_catch_all_still_resolves_not_found() {
    let table = RouteTable::new(vec![def(RouteName::Home, "/"), def(RouteName::NotFound, "/404")]).unwrap();
    let resolution = table.resolve("/missing/page");
    assert_eq!(resolution.name, RouteName::NotFound);
    assert_eq!(resolution.remainder.as_deref(), Some("missing/page"));
}

#[test]
fn root_without_root_pattern_goes_home_via_correction() {
    let table = RouteTable::new(vec![def(RouteName::Home, "/home"), def(RouteName::NotFound, "/404")]).unwrap();
    let resolution = table.resolve("/");
    assert_eq!(resolution.name, RouteName::Home);
    assert_eq!(resolution.correction, Some(Correction::replace("/home")));
}

#[test]
fn routes_without_metadata_use_site_defaults() {
    let table = RouteTable::new(vec![def(RouteName::Home, "/"), def(RouteName::NotFound, "/*rest")]).unwrap();
    assert_eq!(table.resolve("/").meta, SeoMetadata::site_default());
}
