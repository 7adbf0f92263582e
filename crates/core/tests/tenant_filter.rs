//! Integration tests for tenant-scoped list filters.
//!
//! Runs the resolver against the real collection registry and cookie source:
//! - Text-keyed tenants collection
//! - Number-keyed tenants collection
//! - "All tenants" selection and missing cookies

mod common;

use http::HeaderMap;
use multitenant_core::{
    CollectionRegistry, CookieTenantSelection, IdType, SELECT_ALL, TenantFilterResolver, Where,
};
use serde_json::json;

use common::collections::{CATEGORIES_SLUG, TENANTS_SLUG, registry};
use common::headers::{with_cookie_line, with_selected_tenant};

type Resolver = TenantFilterResolver<CollectionRegistry, CookieTenantSelection>;

fn resolver(tenants_id_type: IdType) -> Resolver {
    TenantFilterResolver::new(registry(tenants_id_type), CookieTenantSelection::default())
}

// =============================================================================
// All Tenants
// =============================================================================

mod all_tenants {
    use super::*;

    #[test]
    fn test_select_all_cookie_is_unconstrained() {
        let resolver = resolver(IdType::Text);
        let headers = with_selected_tenant(SELECT_ALL);

        for field in ["tenant", "organization"] {
            let filter = resolver.resolve(&headers, field, TENANTS_SLUG);
            assert_eq!(filter, Where::all());
            assert_eq!(filter.to_json(), json!({}));
        }
    }

    #[test]
    fn test_select_all_with_number_ids() {
        let resolver = resolver(IdType::Number);
        let filter = resolver.resolve(&with_selected_tenant(SELECT_ALL), "tenant", TENANTS_SLUG);
        assert!(filter.is_unconstrained());
    }

    #[test]
    fn test_missing_cookie_is_unconstrained() {
        let resolver = resolver(IdType::Text);
        let filter = resolver.resolve(&HeaderMap::new(), "tenant", TENANTS_SLUG);
        assert!(filter.is_unconstrained());

        let filter = resolver.resolve(&with_cookie_line("theme=dark"), "tenant", TENANTS_SLUG);
        assert!(filter.is_unconstrained());
    }

    #[test]
    fn test_empty_cookie_is_unconstrained() {
        let resolver = resolver(IdType::Number);
        let filter = resolver.resolve(&with_selected_tenant(""), "tenant", TENANTS_SLUG);
        assert!(filter.is_unconstrained());
    }
}

// =============================================================================
// Specific Tenant
// =============================================================================

mod specific_tenant {
    use super::*;

    #[test]
    fn test_text_tenant() {
        let resolver = resolver(IdType::Text);
        let filter = resolver.resolve(&with_selected_tenant("t1"), "tenant", TENANTS_SLUG);
        assert_eq!(filter.to_json(), json!({ "tenant": { "equals": "t1" } }));
    }

    #[test]
    fn test_numeric_tenant_is_a_json_number() {
        let resolver = resolver(IdType::Number);
        let filter = resolver.resolve(&with_selected_tenant("42"), "tenant", TENANTS_SLUG);
        assert_eq!(filter.to_json(), json!({ "tenant": { "equals": 42 } }));
    }

    #[test]
    fn test_numeric_looking_cookie_stays_text_for_text_ids() {
        let resolver = resolver(IdType::Text);
        let filter = resolver.resolve(&with_selected_tenant("42"), "tenant", TENANTS_SLUG);
        assert_eq!(filter.to_json(), json!({ "tenant": { "equals": "42" } }));
    }

    #[test]
    fn test_text_cookie_for_number_ids_falls_back_to_all() {
        let resolver = resolver(IdType::Number);
        let filter = resolver.resolve(&with_selected_tenant("acme"), "tenant", TENANTS_SLUG);
        assert!(filter.is_unconstrained());
    }

    #[test]
    fn test_custom_tenant_field_name() {
        let resolver = resolver(IdType::Text);
        let filter = resolver.resolve(&with_selected_tenant("acme"), "organization", TENANTS_SLUG);
        assert_eq!(filter.to_json(), json!({ "organization": { "equals": "acme" } }));
    }

    #[test]
    fn test_cookie_among_others() {
        let resolver = resolver(IdType::Number);
        let headers = with_cookie_line("lng=en; payload-tenant=7; payload-token=abc");
        let filter = resolver.resolve(&headers, "tenant", TENANTS_SLUG);
        assert_eq!(filter.to_json(), json!({ "tenant": { "equals": 7 } }));
    }

    #[test]
    fn test_identical_inputs_give_identical_filters() {
        let resolver = resolver(IdType::Number);
        let headers = with_selected_tenant("42");
        let first = resolver.resolve(&headers, "tenant", TENANTS_SLUG);
        let second = resolver.resolve(&headers, "tenant", TENANTS_SLUG);
        assert_eq!(first, second);
        assert_eq!(first.to_json(), second.to_json());
    }
}

// =============================================================================
// Identifier Type Lookup
// =============================================================================

mod id_type_lookup {
    use super::*;

    #[test]
    fn test_lookup_is_keyed_by_tenants_collection() {
        // categories has no custom id type, so it uses the text default
        let resolver = resolver(IdType::Number);
        let headers = with_selected_tenant("42");

        let by_tenants = resolver.resolve(&headers, "tenant", TENANTS_SLUG);
        assert_eq!(by_tenants.to_json(), json!({ "tenant": { "equals": 42 } }));

        let by_categories = resolver.resolve(&headers, "tenant", CATEGORIES_SLUG);
        assert_eq!(by_categories.to_json(), json!({ "tenant": { "equals": "42" } }));
    }

    #[test]
    fn test_unknown_tenants_collection_uses_default_id_type() {
        let resolver = resolver(IdType::Number);
        let filter = resolver.resolve(&with_selected_tenant("42"), "tenant", "organizations");
        assert_eq!(filter.to_json(), json!({ "tenant": { "equals": "42" } }));
    }
}

// =============================================================================
// Base List Filters
// =============================================================================

mod base_filters {
    use super::*;

    #[test]
    fn test_base_filter_is_combined() {
        let resolver = resolver(IdType::Text);
        let filter = resolver.resolve_with_base(
            &with_selected_tenant("acme"),
            Some(Where::equals("_status", "published")),
            "tenant",
            TENANTS_SLUG,
        );
        assert_eq!(
            filter.to_json(),
            json!({ "and": [
                { "_status": { "equals": "published" } },
                { "tenant": { "equals": "acme" } }
            ] })
        );
    }

    #[test]
    fn test_base_filter_survives_all_tenants() {
        let resolver = resolver(IdType::Text);
        let base = Where::equals("_status", "published");
        let filter = resolver.resolve_with_base(
            &with_selected_tenant(SELECT_ALL),
            Some(base.clone()),
            "tenant",
            TENANTS_SLUG,
        );
        assert_eq!(filter, base);
    }
}
