// crates.io
use httpmock::{Mock, prelude::*};
use serde_json::json;
// self
use akeneo_pim::{
	client::AkeneoClient,
	collection,
	config::{ClientConfig, Credentials},
	error::{Error, UsageError},
	model::{
		AttributeOptionWrite, CategoryWrite, MediaFileSource, MediaFileTarget, ProductGetParams,
		ProductMediaTarget, ProductSearchFilters, ProductWrite, SearchFilters,
	},
	url::Url,
};

fn test_config(server: &MockServer) -> ClientConfig {
	ClientConfig::new(
		Url::parse(&server.base_url()).expect("Mock server URL should parse."),
		Credentials::new("user", "pass", "client-id", "client-secret"),
	)
}

async fn mock_password_grant(server: &MockServer) -> Mock<'_> {
	server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/v1/token").json_body(json!({
				"grant_type": "password",
				"username": "user",
				"password": "pass",
			}));
			then.status(200).header("content-type", "application/json").json_body(json!({
				"access_token": "access-1",
				"expires_in": 3600,
				"refresh_token": "refresh-1",
				"token_type": "bearer",
			}));
		})
		.await
}

#[tokio::test]
async fn product_get_substitutes_the_identifier_and_forwards_switches() {
	let server = MockServer::start_async().await;
	let _token = mock_password_grant(&server).await;
	let resource = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/rest/v1/products/SKU-1")
				.query_param("with_attribute_options", "true");
			then.status(200).header("content-type", "application/json").json_body(json!({
				"identifier": "SKU-1",
				"enabled": true,
				"family": "shoes",
				"values": {
					"name": [{ "scope": null, "locale": "en_US", "data": "Sneaker" }],
				},
			}));
		})
		.await;
	let client = AkeneoClient::new(test_config(&server));
	let params = ProductGetParams { with_attribute_options: Some(true), ..Default::default() };
	let product =
		client.products().get("SKU-1", params).await.expect("Product fetch should succeed.");

	resource.assert_async().await;

	assert_eq!(product.identifier, "SKU-1");
	assert_eq!(product.family.as_deref(), Some("shoes"));
	assert_eq!(product.values["name"][0].locale.as_deref(), Some("en_US"));
}

#[tokio::test]
async fn product_create_and_delete_succeed_on_empty_bodies() {
	let server = MockServer::start_async().await;
	let _token = mock_password_grant(&server).await;
	let create = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/rest/v1/products")
				.json_body(json!({ "identifier": "SKU-1", "enabled": true }));
			then.status(201);
		})
		.await;
	let delete = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/rest/v1/products/SKU-1");
			then.status(204);
		})
		.await;
	let client = AkeneoClient::new(test_config(&server));
	let product =
		ProductWrite { identifier: "SKU-1".into(), enabled: Some(true), ..Default::default() };

	client.products().create(&product).await.expect("Product create should succeed.");
	client.products().delete("SKU-1").await.expect("Product delete should succeed.");

	create.assert_async().await;
	delete.assert_async().await;
}

#[tokio::test]
async fn product_upsert_many_sends_a_collection_and_decodes_per_line_results() {
	let server = MockServer::start_async().await;
	let _token = mock_password_grant(&server).await;
	let resource = server
		.mock_async(|when, then| {
			when.method(PATCH)
				.path("/rest/v1/products")
				.header("content-type", "application/vnd.akeneo.collection+json")
				.body("{\"identifier\":\"SKU-1\"}\n{\"identifier\":\"SKU-2\"}");
			then.status(200)
				.header("content-type", "application/vnd.akeneo.collection+json")
				.body(
					"{\"line\":1,\"identifier\":\"SKU-1\",\"status_code\":204}\n{\"line\":2,\"identifier\":\"SKU-2\",\"status_code\":422,\"message\":\"Invalid family.\"}",
				);
		})
		.await;
	let client = AkeneoClient::new(test_config(&server));
	let products = [
		ProductWrite { identifier: "SKU-1".into(), ..Default::default() },
		ProductWrite { identifier: "SKU-2".into(), ..Default::default() },
	];
	let lines =
		client.products().upsert_many(&products).await.expect("Bulk upsert should succeed.");

	resource.assert_async().await;

	assert_eq!(lines.len(), 2);
	assert_eq!(lines[0].status_code, 204);
	assert_eq!(lines[1].identifier.as_deref(), Some("SKU-2"));
	assert_eq!(lines[1].message.as_deref(), Some("Invalid family."));
}

#[tokio::test]
async fn category_list_decodes_pagination_and_yields_the_next_cursor() {
	let server = MockServer::start_async().await;
	let _token = mock_password_grant(&server).await;
	let next = server.url("/rest/v1/categories?pagination_type=search_after&search_after=abc%3D%3D");
	let resource = server
		.mock_async(|when, then| {
			when.method(GET).path("/rest/v1/categories").query_param("limit", "2");
			then.status(200).header("content-type", "application/json").json_body(json!({
				"_links": {
					"self": { "href": server.url("/rest/v1/categories") },
					"first": { "href": server.url("/rest/v1/categories") },
					"next": { "href": next },
				},
				"_embedded": {
					"items": [
						{ "code": "winter", "labels": { "en_US": "Winter" } },
						{ "code": "summer", "labels": { "en_US": "Summer" } },
					],
				},
			}));
		})
		.await;
	let client = AkeneoClient::new(test_config(&server));
	let page = client
		.categories()
		.list(SearchFilters::default().with_limit(2))
		.await
		.expect("Category list should succeed.");

	resource.assert_async().await;

	assert_eq!(page.embedded.items.len(), 2);
	assert_eq!(page.embedded.items[0].code, "winter");

	let next = page.links.next.expect("Next link should be present.");
	let cursor =
		collection::parse_search_after(&next.href).expect("Next link should carry a cursor.");

	assert_eq!(cursor, "abc==");
}

#[test]
fn product_list_without_a_cursor_reports_a_usage_error() {
	let err = collection::parse_search_after("https://pim.example.com/rest/v1/products?page=2")
		.expect_err("Link without a cursor should fail.");

	assert!(matches!(err, Error::Usage(UsageError::MissingSearchAfter { .. })));
}

#[tokio::test]
async fn attribute_and_option_reads_resolve_their_nested_paths() {
	let server = MockServer::start_async().await;
	let _token = mock_password_grant(&server).await;
	let attribute = server
		.mock_async(|when, then| {
			when.method(GET).path("/rest/v1/attributes/color");
			then.status(200).header("content-type", "application/json").json_body(json!({
				"code": "color",
				"type": "pim_catalog_simpleselect",
				"localizable": false,
			}));
		})
		.await;
	let option = server
		.mock_async(|when, then| {
			when.method(GET).path("/rest/v1/attributes/color/options/red");
			then.status(200).header("content-type", "application/json").json_body(json!({
				"code": "red",
				"attribute": "color",
				"sort_order": 1,
				"labels": { "en_US": "Red" },
			}));
		})
		.await;
	let client = AkeneoClient::new(test_config(&server));
	let fetched =
		client.attributes().get("color").await.expect("Attribute fetch should succeed.");
	let red = client
		.attribute_options()
		.get("color", "red")
		.await
		.expect("Option fetch should succeed.");

	attribute.assert_async().await;
	option.assert_async().await;

	assert_eq!(fetched.attribute_type, "pim_catalog_simpleselect");
	assert_eq!(red.labels["en_US"], "Red");
}

#[tokio::test]
async fn attribute_option_upsert_targets_the_owning_attribute_path() {
	let server = MockServer::start_async().await;
	let _token = mock_password_grant(&server).await;
	let resource = server
		.mock_async(|when, then| {
			when.method(PATCH)
				.path("/rest/v1/attributes/color/options")
				.header("content-type", "application/vnd.akeneo.collection+json");
			then.status(200)
				.header("content-type", "application/vnd.akeneo.collection+json")
				.body("{\"line\":1,\"code\":\"red\",\"status_code\":201}");
		})
		.await;
	let client = AkeneoClient::new(test_config(&server));
	let options = [AttributeOptionWrite { code: "red".into(), ..Default::default() }];
	let lines = client
		.attribute_options()
		.upsert_many("color", &options)
		.await
		.expect("Option upsert should succeed.");

	resource.assert_async().await;

	assert_eq!(lines[0].code.as_deref(), Some("red"));
	assert_eq!(lines[0].status_code, 201);
}

#[tokio::test]
async fn category_upsert_sends_one_line_per_category() {
	let server = MockServer::start_async().await;
	let _token = mock_password_grant(&server).await;
	let resource = server
		.mock_async(|when, then| {
			when.method(PATCH)
				.path("/rest/v1/categories")
				.body("{\"code\":\"winter\",\"parent\":\"master\",\"labels\":{\"en_US\":\"Winter\"}}");
			then.status(200)
				.header("content-type", "application/vnd.akeneo.collection+json")
				.body("{\"line\":1,\"code\":\"winter\",\"status_code\":204}");
		})
		.await;
	let client = AkeneoClient::new(test_config(&server));
	let categories = [CategoryWrite {
		code: "winter".into(),
		parent: Some("master".into()),
		labels: [("en_US".to_owned(), "Winter".to_owned())].into(),
		..Default::default()
	}];
	let lines = client
		.categories()
		.upsert_many(&categories)
		.await
		.expect("Category upsert should succeed.");

	resource.assert_async().await;

	assert_eq!(lines[0].code.as_deref(), Some("winter"));
}

#[tokio::test]
async fn product_search_filters_reach_the_wire_as_scalars() {
	let server = MockServer::start_async().await;
	let _token = mock_password_grant(&server).await;
	let resource = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/rest/v1/products")
				.query_param("scope", "ecommerce")
				.query_param("search", "{\"family\":[{\"operator\":\"IN\",\"value\":[\"shoes\"]}]}");
			then.status(200).header("content-type", "application/json").json_body(json!({
				"_links": {
					"self": { "href": server.url("/rest/v1/products") },
					"first": { "href": server.url("/rest/v1/products") },
				},
				"_embedded": { "items": [{ "identifier": "SKU-1" }] },
			}));
		})
		.await;
	let client = AkeneoClient::new(test_config(&server));
	let filters = ProductSearchFilters {
		filters: SearchFilters::default()
			.with_search(json!({ "family": [{ "operator": "IN", "value": ["shoes"] }] })),
		scope: Some("ecommerce".into()),
		..Default::default()
	};
	let page = client.products().list(filters).await.expect("Product list should succeed.");

	resource.assert_async().await;

	assert_eq!(page.embedded.items[0].identifier, "SKU-1");
}

#[tokio::test]
async fn media_upload_returns_the_location_header() {
	let server = MockServer::start_async().await;
	let _token = mock_password_grant(&server).await;
	let location = server.url("/rest/v1/media-files/7/download");
	let resource = server
		.mock_async(|when, then| {
			when.method(POST).path("/rest/v1/media-files");
			then.status(201).header("location", location.as_str());
		})
		.await;
	let client = AkeneoClient::new(test_config(&server));
	let source =
		MediaFileSource::Bytes { data: b"fake image".to_vec(), file_name: "shoe.png".into() };
	let target = MediaFileTarget::Product(ProductMediaTarget {
		identifier: "SKU-1".into(),
		attribute: "picture".into(),
		scope: None,
		locale: None,
	});
	let created =
		client.media_files().create(source, &target).await.expect("Upload should succeed.");

	resource.assert_async().await;

	assert_eq!(created, location);
}

#[tokio::test]
async fn media_upload_without_a_location_header_fails() {
	let server = MockServer::start_async().await;
	let _token = mock_password_grant(&server).await;
	let _resource = server
		.mock_async(|when, then| {
			when.method(POST).path("/rest/v1/media-files");
			then.status(201);
		})
		.await;
	let client = AkeneoClient::new(test_config(&server));
	let source = MediaFileSource::Bytes { data: b"fake image".to_vec(), file_name: "x.png".into() };
	let target = MediaFileTarget::Product(ProductMediaTarget {
		identifier: "SKU-1".into(),
		attribute: "picture".into(),
		scope: None,
		locale: None,
	});
	let err = client
		.media_files()
		.create(source, &target)
		.await
		.expect_err("Upload without a location header should fail.");

	assert!(matches!(err, Error::MissingLocation { .. }));
}

#[tokio::test]
async fn media_download_saves_the_streamed_bytes() {
	let server = MockServer::start_async().await;
	let _token = mock_password_grant(&server).await;
	let resource = server
		.mock_async(|when, then| {
			when.method(GET).path("/rest/v1/media-files/7/download");
			then.status(200)
				.header("content-type", "application/octet-stream")
				.body("streamed media bytes");
		})
		.await;
	let client = AkeneoClient::new(test_config(&server));
	let download =
		client.media_files().download("7").await.expect("Download should start.");
	let path = std::env::temp_dir().join("akeneo-pim-download-it.bin");

	download.save(&path).await.expect("Save should succeed.");

	resource.assert_async().await;

	let saved = std::fs::read(&path).expect("Saved file should read back.");

	assert_eq!(saved, b"streamed media bytes");

	std::fs::remove_file(&path).expect("Temporary file should be removable.");
}

#[tokio::test]
async fn media_download_rejects_an_empty_target_path() {
	let server = MockServer::start_async().await;
	let _token = mock_password_grant(&server).await;
	let _resource = server
		.mock_async(|when, then| {
			when.method(GET).path("/rest/v1/media-files/7/download");
			then.status(200).body("bytes");
		})
		.await;
	let client = AkeneoClient::new(test_config(&server));
	let download =
		client.media_files().download("7").await.expect("Download should start.");
	let err = download.save("").await.expect_err("Empty target path should fail.");

	assert!(matches!(err, Error::Usage(UsageError::EmptyMediaPath)));
}
