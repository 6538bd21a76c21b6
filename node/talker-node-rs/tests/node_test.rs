use comms::ZenohConfig;
use std::time::Duration;
use talker::{Frequency, Shutdown};
use talker_node::{NodeConfig, TalkerNode};

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_node_keeps_publishing_without_server() {
    env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Info)
        .try_init()
        .ok();

    let config = NodeConfig {
        zenoh: ZenohConfig {
            multicast_scouting: false,
            chatter_key: "test/node/chatter".to_string(),
            service_key: "test/node/change_string".to_string(),
            tf_key: "test/node/tf".to_string(),
            query_timeout_ms: 200,
            ..Default::default()
        },
        ..Default::default()
    };

    let mut node = TalkerNode::open(config).await.expect("Failed to open node");
    let shutdown = Shutdown::new();
    let stop = async {
        tokio::time::sleep(Duration::from_millis(450)).await;
        shutdown.trigger();
    };
    let (stats, _) = tokio::join!(node.run(Frequency::new(10).unwrap(), &shutdown), stop);

    assert!(stats.ticks >= 2);
    assert_eq!(stats.published, stats.ticks);
    assert_eq!(stats.rpc_failures, stats.ticks);
    assert_eq!(stats.responses, 0);

    node.close().await.expect("Failed to close node");
}
