// SPDX-FileCopyrightText: 2026 ctxpanel contributors
// SPDX-License-Identifier: MIT

//! Built-in demo records for `--demo` mode and tests.

use std::collections::BTreeMap;

use serde_json::json;

use super::record::{
    CustomContextItem, DiagnosticRecord, ExceptionInfo, GitInfo, LivewireInfo, LivewireUpdate,
    RequestData, RequestInfo, RouteInfo, UploadedFile, ViewInfo,
};

/// A fully populated occurrence: every group in the policy table
/// materializes.
pub fn demo_record() -> DiagnosticRecord {
    let mut headers = BTreeMap::new();
    headers.insert("accept".to_owned(), "text/html".to_owned());
    headers.insert("host".to_owned(), "shop.example.test".to_owned());
    headers.insert("user-agent".to_owned(), "Mozilla/5.0 (demo)".to_owned());

    let mut query_string = BTreeMap::new();
    query_string.insert("page".to_owned(), "2".to_owned());
    query_string.insert("sort".to_owned(), "price".to_owned());

    let mut session = BTreeMap::new();
    session.insert("_token".to_owned(), json!("dO5Vh3nQ"));
    session.insert("cart_id".to_owned(), json!(8812));

    let mut cookies = BTreeMap::new();
    cookies.insert("laravel_session".to_owned(), "eyJpdiI6...".to_owned());

    let mut route_parameters = BTreeMap::new();
    route_parameters.insert("product".to_owned(), json!("blue-lamp"));

    let mut view_data = BTreeMap::new();
    view_data.insert("product".to_owned(), json!({"id": 42, "name": "Blue lamp"}));

    let mut livewire_data = BTreeMap::new();
    livewire_data.insert("quantity".to_owned(), json!(3));
    livewire_data.insert("options".to_owned(), json!({"gift_wrap": true}));

    let mut user = BTreeMap::new();
    user.insert("id".to_owned(), json!(17));
    user.insert("email".to_owned(), json!("ada@example.test"));

    let mut env = BTreeMap::new();
    env.insert("php_version".to_owned(), "8.3.4".to_owned());
    env.insert("laravel_version".to_owned(), "11.9.0".to_owned());
    env.insert("laravel_locale".to_owned(), "en".to_owned());

    let mut exception_context = BTreeMap::new();
    exception_context.insert("order_id".to_owned(), json!(5521));

    let mut error_context = BTreeMap::new();
    error_context.insert("attempt".to_owned(), json!(3));
    error_context.insert("gateway".to_owned(), json!("stripe"));

    DiagnosticRecord {
        request: Some(RequestInfo {
            url: "https://shop.example.test/products/blue-lamp?page=2&sort=price".to_owned(),
            method: "GET".to_owned(),
            ip: Some("203.0.113.7".to_owned()),
            useragent: Some("Mozilla/5.0 (demo)".to_owned()),
        }),
        request_data: Some(RequestData {
            query_string,
            body: Some(demo_body().to_owned()),
            files: vec![UploadedFile {
                name: "invoice.pdf".to_owned(),
                size: 48_211,
                mime_type: Some("application/pdf".to_owned()),
            }],
        }),
        headers: Some(headers),
        session,
        cookies,
        route: Some(RouteInfo {
            route: Some("products.show".to_owned()),
            controller_action: Some("App\\Http\\Controllers\\ProductController@show".to_owned()),
            middleware: vec!["web".to_owned(), "auth".to_owned()],
            route_parameters,
        }),
        view: Some(ViewInfo { name: "products.show".to_owned(), data: view_data }),
        livewire: Some(LivewireInfo {
            component_alias: Some("product-configurator".to_owned()),
            component_class: Some("App\\Livewire\\ProductConfigurator".to_owned()),
            component_id: Some("wq1Xz8".to_owned()),
            updates: vec![LivewireUpdate {
                kind: "callMethod".to_owned(),
                payload: json!({"method": "addToCart", "params": []}),
            }],
            data: livewire_data,
        }),
        user: Some(user),
        git: Some(GitInfo {
            hash: Some("4f2a91cde8".to_owned()),
            message: Some("Fix price rounding on configurator totals".to_owned()),
            tag: Some("v2.14.1".to_owned()),
            remote: Some("git@github.test:acme/shop.git".to_owned()),
            is_dirty: true,
        }),
        env,
        exception: Some(ExceptionInfo {
            class: Some("App\\Exceptions\\PaymentFailed".to_owned()),
            message: Some("Payment gateway rejected the charge".to_owned()),
            trace: Some(demo_trace().to_owned()),
            context: exception_context,
        }),
        custom_context_items: vec![CustomContextItem {
            name: "error_context".to_owned(),
            items: error_context,
        }],
    }
}

/// A sparse occurrence: no request payload, no Livewire, no custom items.
/// Only the App and Context groups materialize.
pub fn sparse_record() -> DiagnosticRecord {
    DiagnosticRecord {
        route: Some(RouteInfo {
            route: Some("cli.schedule".to_owned()),
            controller_action: None,
            middleware: Vec::new(),
            route_parameters: BTreeMap::new(),
        }),
        ..DiagnosticRecord::default()
    }
}

fn demo_body() -> &'static str {
    "{\n  \"quantity\": 3,\n  \"gift_wrap\": true,\n  \"note\": \"Please deliver after 17:00.\",\n  \"address\": {\n    \"street\": \"12 Analytical Way\",\n    \"city\": \"Lovelace\",\n    \"zip\": \"18152\"\n  },\n  \"items\": [\n    {\"sku\": \"LAMP-BLUE\", \"qty\": 3},\n    {\"sku\": \"BULB-E27\", \"qty\": 6}\n  ]\n}"
}

fn demo_trace() -> &'static str {
    "#0 app/Services/Payments.php(88): Gateway->charge()\n#1 app/Livewire/ProductConfigurator.php(141): Payments->capture()\n#2 vendor/livewire/src/ComponentConcerns/HandlesActions.php(87): ProductConfigurator->addToCart()\n#3 vendor/laravel/framework/src/Routing/Controller.php(54): callAction()\n#4 public/index.php(17): Kernel->handle()"
}
