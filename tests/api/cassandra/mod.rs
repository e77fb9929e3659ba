mod ping {
    use assert_matches::assert_matches;
    use log::info;
    use serde_json::Value;
    use serial_test::file_serial;

    use crate::integration_helpers::lifecycle::TestServer;

    #[test_log::test(tokio::test)]
    #[file_serial(cassandra_server)]
    #[ignore = "requires a running Cassandra instance"]
    async fn test_version() {
        let server = TestServer::start().await.unwrap();
        let client = server.client("Cassandra");

        let data = client.call_service_and_get_data("ping", &[]).await.unwrap();
        info!("Cassandra version: {}", data);
        assert_matches!(data, Value::String(version) => {
            assert!(!version.is_empty());
        });

        server.close().await.unwrap();
    }
}

mod select {
    use assert_matches::assert_matches;
    use pokedex_cassandra::api::envelope::AppResponse;
    use pokedex_cassandra::models::pokemon::Pokemon;
    use serial_test::file_serial;

    use crate::integration_helpers::factories::pokemon::seed_pokemon;
    use crate::integration_helpers::lifecycle::TestServer;

    #[test_log::test(tokio::test)]
    #[file_serial(cassandra_server)]
    #[ignore = "requires a running Cassandra instance"]
    async fn test_seed_pokemon() {
        let server = TestServer::start().await.unwrap();
        let client = server.client("Cassandra");

        let data = client.call_service_and_get_data("select", &[("id", "1")]).await.unwrap();
        let pokemon: Pokemon = serde_json::from_value(data).unwrap();
        assert_eq!(seed_pokemon(1), pokemon);
        assert_eq!("Bulbasaur", pokemon.name);
        assert_eq!("grass", pokemon.pokemon_type);

        server.close().await.unwrap();
    }

    #[test_log::test(tokio::test)]
    #[file_serial(cassandra_server)]
    #[ignore = "requires a running Cassandra instance"]
    async fn test_does_not_exist() {
        let server = TestServer::start().await.unwrap();
        let client = server.client("Cassandra");

        let response = client.call_service("select", &[("id", "424242")]).await.unwrap();
        assert_matches!(response, AppResponse::Exception { error, .. } => {
            assert!(error.contains("424242"), "unexpected error: {}", error);
        });

        server.close().await.unwrap();
    }

    #[test_log::test(tokio::test)]
    #[file_serial(cassandra_server)]
    #[ignore = "requires a running Cassandra instance"]
    async fn test_missing_id() {
        let server = TestServer::start().await.unwrap();
        let client = server.client("Cassandra");

        let response = client.call_service("select", &[]).await.unwrap();
        assert_matches!(response, AppResponse::Exception { .. });

        server.close().await.unwrap();
    }
}

mod insert {
    use pokedex_cassandra::models::pokemon::Pokemon;
    use serde_json::Value;
    use serial_test::file_serial;

    use crate::integration_helpers::factories::pokemon::build_pikachu;
    use crate::integration_helpers::lifecycle::TestServer;

    #[test_log::test(tokio::test)]
    #[file_serial(cassandra_server)]
    #[ignore = "requires a running Cassandra instance"]
    async fn test_insert_then_verify() {
        let server = TestServer::start().await.unwrap();
        let client = server.client("Cassandra");
        let pikachu = build_pikachu();

        let data = client
            .call_service_and_get_data(
                "insert",
                &[("id", "100"), ("name", &pikachu.name), ("type", &pikachu.pokemon_type)],
            )
            .await
            .unwrap();
        assert_eq!(Value::Null, data);

        let data = client.call_service_and_get_data("verify", &[("id", "100")]).await.unwrap();
        let pokemon: Pokemon = serde_json::from_value(data).unwrap();
        assert_eq!(pikachu, pokemon);

        server.close().await.unwrap();
    }
}

mod update {
    use pokedex_cassandra::models::pokemon::Pokemon;
    use serde_json::Value;
    use serial_test::file_serial;

    use crate::integration_helpers::factories::pokemon::seed_pokemon;
    use crate::integration_helpers::lifecycle::TestServer;

    #[test_log::test(tokio::test)]
    #[file_serial(cassandra_server)]
    #[ignore = "requires a running Cassandra instance"]
    async fn test_update_then_verify() {
        let server = TestServer::start().await.unwrap();
        let client = server.client("Cassandra");

        let data = client
            .call_service_and_get_data("update", &[("id", "2"), ("name", "Charmeleon")])
            .await
            .unwrap();
        assert_eq!(Value::Null, data);

        let data = client.call_service_and_get_data("verify", &[("id", "2")]).await.unwrap();
        let pokemon: Pokemon = serde_json::from_value(data).unwrap();
        assert_eq!("Charmeleon", pokemon.name);
        assert_eq!(seed_pokemon(2).pokemon_type, pokemon.pokemon_type);

        server.close().await.unwrap();
    }

    #[test_log::test(tokio::test)]
    #[file_serial(cassandra_server)]
    #[ignore = "requires a running Cassandra instance"]
    async fn test_value_alias() {
        let server = TestServer::start().await.unwrap();
        let client = server.client("Cassandra");

        client
            .call_service_and_get_data("update", &[("id", "2"), ("value", "Charizard")])
            .await
            .unwrap();

        let data = client.call_service_and_get_data("verify", &[("id", "2")]).await.unwrap();
        let pokemon: Pokemon = serde_json::from_value(data).unwrap();
        assert_eq!("Charizard", pokemon.name);

        server.close().await.unwrap();
    }
}

mod delete {
    use serde_json::Value;
    use serial_test::file_serial;

    use crate::integration_helpers::lifecycle::TestServer;

    #[test_log::test(tokio::test)]
    #[file_serial(cassandra_server)]
    #[ignore = "requires a running Cassandra instance"]
    async fn test_delete_then_verify() {
        let server = TestServer::start().await.unwrap();
        let client = server.client("Cassandra");

        let data = client.call_service_and_get_data("delete", &[("id", "3")]).await.unwrap();
        assert_eq!(Value::Null, data);

        let data = client.call_service_and_get_data("verify", &[("id", "3")]).await.unwrap();
        assert_eq!(Value::Null, data);

        server.close().await.unwrap();
    }
}
