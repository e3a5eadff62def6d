use dogdisk_uploader::{
    app::{App, AppServices},
    disk::{DiskClient, DiskService, MockDiskClient},
    dogs::{DogApiClient, DogApiService, MockDogApiClient},
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FOLDER: &str = "dog_images";

fn build_app(dogs: &MockDogApiClient, disk: &MockDiskClient) -> App {
    App::with_services(
        AppServices {
            dogs: Box::new(dogs.clone()),
            disk: Box::new(disk.clone()),
        },
        FOLDER.to_string(),
    )
}

/// Re-lists the destination folder and checks entry count, entry type and
/// the breed-name prefix of every file.
async fn verify_uploads(breed: &str, dogs: &MockDogApiClient, disk: &MockDiskClient) {
    let sub_breeds = dogs.list_sub_breeds(breed).await.unwrap();
    let expected = sub_breeds.len().max(1);

    let items = disk.list_folder(FOLDER).await.unwrap();
    assert_eq!(
        items.len(),
        expected,
        "expected {} files for breed '{}'",
        expected,
        breed
    );

    for item in &items {
        assert_eq!(item.kind, "file");
        assert!(
            item.name.starts_with(breed),
            "file '{}' should be prefixed by '{}'",
            item.name,
            breed
        );
    }
}

#[tokio::test]
async fn test_uploaded_listing_matches_expectations_per_breed() {
    let cases: &[(&str, &[&str])] = &[
        ("doberman", &[]),
        ("bulldog", &[]),
        ("collie", &["border", "smooth"]),
    ];

    for &(breed, sub_breeds) in cases {
        let dogs = MockDogApiClient::new().with_sub_breeds(breed, sub_breeds);
        let disk = MockDiskClient::new();

        build_app(&dogs, &disk).run(breed).await.unwrap();
        verify_uploads(breed, &dogs, &disk).await;
    }
}

#[tokio::test]
async fn test_collie_run_creates_both_sub_breed_files() {
    let dogs = MockDogApiClient::new().with_sub_breeds("collie", &["border", "smooth"]);
    let disk = MockDiskClient::new();

    build_app(&dogs, &disk).run("collie").await.unwrap();

    let mut names: Vec<String> = disk
        .list_folder(FOLDER)
        .await
        .unwrap()
        .into_iter()
        .map(|item| item.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["collie_border.jpg", "collie_smooth.jpg"]);
}

#[tokio::test]
async fn test_bulldog_run_creates_single_breed_file() {
    let dogs = MockDogApiClient::new();
    let disk = MockDiskClient::new();

    build_app(&dogs, &disk).run("bulldog").await.unwrap();

    let items = disk.list_folder(FOLDER).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "bulldog.jpg");
    assert_eq!(items[0].kind, "file");
}

#[tokio::test]
async fn test_one_failing_fetch_leaves_other_uploads_visible() {
    let dogs = MockDogApiClient::new()
        .with_sub_breeds("spaniel", &["blenheim", "brittany", "cocker"])
        .with_failing_image("spaniel", Some("brittany"));
    let disk = MockDiskClient::new();

    build_app(&dogs, &disk).run("spaniel").await.unwrap();

    let items = disk.list_folder(FOLDER).await.unwrap();
    assert_eq!(items.len(), 2);
    for item in &items {
        assert_eq!(item.kind, "file");
        assert!(item.name.starts_with("spaniel"));
    }
}

#[tokio::test]
async fn test_repeated_runs_never_fail_on_folder_creation() {
    let dogs = MockDogApiClient::new().with_sub_breeds("collie", &["border", "smooth"]);
    let disk = MockDiskClient::new();
    let app = build_app(&dogs, &disk);

    app.run("collie").await.unwrap();
    app.run("collie").await.unwrap();

    assert_eq!(disk.get_create_count(), 2);
    assert_eq!(disk.get_conflict_count(), 1);
    verify_uploads("collie", &dogs, &disk).await;
}

/// Full round trip through the real HTTP clients against mock servers: the
/// dog API serves the taxonomy and image URLs, the Disk API records folder
/// creation and both uploads.
#[tokio::test]
async fn test_end_to_end_with_real_clients() {
    let dog_server = MockServer::start().await;
    let disk_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/breed/collie/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": ["border", "smooth"],
            "status": "success"
        })))
        .expect(1)
        .mount(&dog_server)
        .await;

    for sub in ["border", "smooth"] {
        Mock::given(method("GET"))
            .and(path(format!("/breed/collie/{}/images/random", sub)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": format!("https://images.dog.ceo/breeds/collie-{}/n1.jpg", sub),
                "status": "success"
            })))
            .expect(1)
            .mount(&dog_server)
            .await;
    }

    Mock::given(method("PUT"))
        .and(path("/"))
        .and(query_param("path", FOLDER))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&disk_server)
        .await;

    for sub in ["border", "smooth"] {
        Mock::given(method("POST"))
            .and(path("/upload"))
            .and(query_param("path", format!("{}/collie_{}.jpg", FOLDER, sub)))
            .and(query_param(
                "url",
                format!("https://images.dog.ceo/breeds/collie-{}/n1.jpg", sub),
            ))
            .and(query_param("overwrite", "true"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&disk_server)
            .await;
    }

    let http_client = reqwest::Client::new();
    let app = App::with_services(
        AppServices {
            dogs: Box::new(DogApiClient::new(http_client.clone(), dog_server.uri())),
            disk: Box::new(DiskClient::new(
                http_client,
                "test-token".to_string(),
                disk_server.uri(),
            )),
        },
        FOLDER.to_string(),
    );

    app.run("collie").await.unwrap();
    // Mock expectations (one listing call, one create, two fetches, two
    // uploads) are verified when the servers drop.
}
