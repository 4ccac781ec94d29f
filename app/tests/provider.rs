use domain_inventory::model::{
    entity::{Disk, File},
    vo::Status,
};
use indoc::indoc;
use inventory_system::{InventoryConfig, ServiceProvider};

fn provider(yaml: &str) -> ServiceProvider {
    let config = config::Config::builder()
        .add_source(config::File::from_str(yaml, config::FileFormat::Yaml))
        .build()
        .unwrap();
    ServiceProvider::build(InventoryConfig::load(&config).unwrap())
}

#[tokio::test]
async fn services_share_one_store() {
    let provider = provider("");
    let file = File::new(1, "pdf", 40);
    let entity = provider.entity_service();
    assert_eq!(Status::Ok, entity.add_disk(&Disk::new(10, "wd", 3, 100, 2)).await);
    assert_eq!(Status::Ok, entity.add_file(&file).await);
    assert_eq!(
        Status::Ok,
        provider.placement_service().add_file_to_disk(&file, 10).await
    );
    assert_eq!(60, entity.get_disk_by_id(10).await.unwrap().free_space);
    assert_eq!(80, provider.analytics_service().get_cost_for_type("pdf").await);
}

#[tokio::test]
async fn configuration_reaches_the_services() {
    let provider = provider(indoc! {"
        telemetry:
          enable: false
        entity:
          strict_file_delete: true
        analytics:
          close_files_limit: 1
    "});
    let entity = provider.entity_service();
    assert_eq!(Status::NotExists, entity.delete_file(&File::new(7, "pdf", 1)).await);

    for id in 1..=3 {
        entity.add_file(&File::new(id, "pdf", 1)).await;
    }
    // File 1 is placed nowhere, so files 2 and 3 are both close; the limit keeps one.
    assert_eq!(vec![2], provider.analytics_service().get_close_files(1).await);
}

#[test]
fn bootstrap_rejects_a_missing_file() {
    let missing = std::path::Path::new("/nonexistent/inventory.yaml");
    assert!(inventory_system::bootstrap(Some(missing)).is_err());
}
