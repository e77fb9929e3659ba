mod init {
    use serde_json::Value;
    use serial_test::file_serial;

    use crate::integration_helpers::factories::pokemon::seed_pokemon;
    use crate::integration_helpers::lifecycle::TestServer;

    #[test_log::test(tokio::test)]
    #[file_serial(cassandra_server)]
    #[ignore = "requires a running Cassandra instance"]
    async fn test_init_restores_seed() {
        let server = TestServer::start().await.unwrap();
        let client = server.client("Cassandra");
        let lifecycle = server.client("LifeCycle");

        client.call_service_and_get_data("delete", &[("id", "1")]).await.unwrap();

        let data = lifecycle.call_service_and_get_data("init", &[]).await.unwrap();
        assert_eq!(Value::Null, data);

        let data = client.call_service_and_get_data("verify", &[("id", "1")]).await.unwrap();
        assert_eq!(serde_json::to_value(seed_pokemon(1)).unwrap(), data);

        server.close().await.unwrap();
    }
}

mod exit {
    use pokedex_cassandra::api::lifecycle::EXIT_MESSAGE;
    use serial_test::file_serial;

    use crate::integration_helpers::lifecycle::TestServer;

    #[test_log::test(tokio::test)]
    #[file_serial(cassandra_server)]
    #[ignore = "requires a running Cassandra instance"]
    async fn test_exit_message() {
        let server = TestServer::start().await.unwrap();

        let message = server.close().await.unwrap();
        assert_eq!(EXIT_MESSAGE, message);
    }
}
