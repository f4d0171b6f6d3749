//! Device list, discovery and claim commands.

use pvs_link_core::protocol::records::{
    ClaimOperation, ClaimOperationList, DeviceDetail, DeviceFamily, DiscoveryRequest,
};
use pvs_link_core::protocol::vocabulary::ClaimOp;
use pvs_link_core::GatewayClient;

use crate::cli::{DeviceArgs, DeviceCommands, StartClaimArgs, StartDiscoveryArgs};
use crate::error::{CliError, Result};
use crate::input;
use crate::output::{render, render_devices, OutputFormatter};

/// Run the device command
pub async fn run_device(
    args: DeviceArgs,
    client: &GatewayClient,
    output: &dyn OutputFormatter,
) -> Result<String> {
    match args.command {
        DeviceCommands::List { detailed } => {
            render_devices(output, &client.list_devices(detailed).await?)
        }
        DeviceCommands::Pvs => family(client, output, DeviceDetail::is_supervisor).await,
        DeviceCommands::Inverters => {
            family(client, output, |d| matches!(d.family, DeviceFamily::Inverter(_))).await
        }
        DeviceCommands::Meters => {
            family(client, output, |d| matches!(d.family, DeviceFamily::PowerMeter(_))).await
        }
        DeviceCommands::StartDiscovery(args) => {
            let request = discovery_request(args);
            render(output, &client.start_discovery(&request).await?)
        }
        DeviceCommands::DiscoveryProgress => render(output, &client.discovery_progress().await?),
        DeviceCommands::StartClaim(args) => {
            let operations = claim_operations(args)?;
            render(output, &client.start_claim(&operations).await?)
        }
        DeviceCommands::ClaimProgress => render(output, &client.claim_progress().await?),
    }
}

/// Detailed devices of one family, one table each.
async fn family<F>(client: &GatewayClient, output: &dyn OutputFormatter, keep: F) -> Result<String>
where
    F: Fn(&DeviceDetail) -> bool,
{
    let devices: Vec<DeviceDetail> = client
        .list_devices(true)
        .await?
        .into_iter()
        .filter(|device| keep(device))
        .collect();
    render_devices(output, &devices)
}

fn discovery_request(args: StartDiscoveryArgs) -> DiscoveryRequest {
    DiscoveryRequest {
        num_devices: args.num_devices,
        mi_type: args.mi_type,
        device: args.device,
        interfaces: (!args.interfaces.is_empty()).then_some(args.interfaces),
        save_config_file: args.save_config_file,
        keep_devices: args.keep_devices,
    }
}

fn claim_operations(args: StartClaimArgs) -> Result<ClaimOperationList> {
    if let Some(path) = &args.operations_file {
        return input::read_record(path);
    }

    let mut operations = Vec::new();
    for (op, values) in [
        (ClaimOp::Add, &args.add),
        (ClaimOp::Delete, &args.delete),
        (ClaimOp::Noop, &args.noop),
    ] {
        for value in values {
            operations.push(parse_claim(op, value)?);
        }
    }

    if operations.is_empty() {
        return Err(CliError::Usage(
            "at least one of --add, --delete, --noop or --operations-file is required".to_string(),
        ));
    }
    Ok(operations)
}

/// Parse a `MODEL:SERIAL:TYPE` claim argument.
fn parse_claim(operation: ClaimOp, value: &str) -> Result<ClaimOperation> {
    match value.split(':').collect::<Vec<_>>().as_slice() {
        [model, serial, kind] if !model.is_empty() && !serial.is_empty() && !kind.is_empty() => {
            Ok(ClaimOperation {
                operation,
                model: model.to_string(),
                serial: serial.to_string(),
                kind: kind.to_string(),
            })
        }
        _ => Err(CliError::Usage(format!(
            "invalid --{} value '{}': expected MODEL:SERIAL:TYPE",
            operation, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{client_for, json_output, table_output};
    use mockito::Matcher;
    use serde_json::{json, Value};
    use std::io::Write;

    fn claim_args(add: &[&str]) -> StartClaimArgs {
        StartClaimArgs {
            add: add.iter().map(|s| s.to_string()).collect(),
            delete: Vec::new(),
            noop: Vec::new(),
            operations_file: None,
        }
    }

    #[tokio::test]
    async fn test_start_claim_without_operations_sends_nothing() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/dl_cgi/devices")
            .expect(0)
            .create_async()
            .await;

        let args = DeviceArgs {
            command: DeviceCommands::StartClaim(claim_args(&[])),
        };
        let err = run_device(args, &client_for(&server), &json_output()).await.unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
        assert_eq!(err.exit_code(), crate::error::exit_codes::INVALID_ARGS);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_malformed_claim_is_usage_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/dl_cgi/devices")
            .expect(0)
            .create_async()
            .await;

        for bad in ["AM1:SN1", "AM1::Inverter", "AM1:SN1:Inverter:extra"] {
            let args = DeviceArgs {
                command: DeviceCommands::StartClaim(claim_args(&[bad])),
            };
            let err = run_device(args, &client_for(&server), &json_output()).await.unwrap_err();
            assert!(matches!(err, CliError::Usage(_)), "{bad}");
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_start_claim_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/dl_cgi/devices")
            .match_body(Matcher::Json(json!([
                {"OPERATION": "add", "MODEL": "AC_Module_Type_E", "SERIAL": "E00122", "TYPE": "SOLARBRIDGE"},
                {"OPERATION": "delete", "MODEL": "PVS5M", "SERIAL": "M0400", "TYPE": "PVS5-METER-P"}
            ])))
            .with_status(200)
            .with_body(r#"{"result": "succeed", "success": true}"#)
            .create_async()
            .await;

        let args = DeviceArgs {
            command: DeviceCommands::StartClaim(StartClaimArgs {
                add: vec!["AC_Module_Type_E:E00122:SOLARBRIDGE".to_string()],
                delete: vec!["PVS5M:M0400:PVS5-METER-P".to_string()],
                noop: Vec::new(),
                operations_file: None,
            }),
        };
        run_device(args, &client_for(&server), &json_output()).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_operations_file_wins_over_flags() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"OPERATION": "noop", "MODEL": "M", "SERIAL": "FROMFILE", "TYPE": "T"}}]"#
        )
        .unwrap();

        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/dl_cgi/devices")
            .match_body(Matcher::Json(json!([
                {"OPERATION": "noop", "MODEL": "M", "SERIAL": "FROMFILE", "TYPE": "T"}
            ])))
            .with_status(200)
            .with_body(r#"{"result": "succeed"}"#)
            .create_async()
            .await;

        let mut args = claim_args(&["M:FROMFLAG:T"]);
        args.operations_file = Some(file.path().to_path_buf());
        let args = DeviceArgs {
            command: DeviceCommands::StartClaim(args),
        };
        run_device(args, &client_for(&server), &json_output()).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_claim_progress_json() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/dl_cgi/devices")
            .with_status(200)
            .with_body(r#"{"result": "succeed", "percent": 42.5}"#)
            .create_async()
            .await;

        let args = DeviceArgs {
            command: DeviceCommands::ClaimProgress,
        };
        let printed = run_device(args, &client_for(&server), &json_output()).await.unwrap();
        let value: Value = serde_json::from_str(&printed).unwrap();
        assert_eq!(value["percent"], json!(42.5));
        assert_eq!(value["result"], json!("succeed"));
    }

    #[tokio::test]
    async fn test_discovery_progress_overall_percent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/dl_cgi/discovery")
            .with_status(200)
            .with_body(r#"{"result": "succeed", "percent": 42.5}"#)
            .create_async()
            .await;

        let args = DeviceArgs {
            command: DeviceCommands::DiscoveryProgress,
        };
        let printed = run_device(args, &client_for(&server), &json_output()).await.unwrap();
        mock.assert_async().await;

        let value: Value = serde_json::from_str(&printed).unwrap();
        assert_eq!(value["percent"], json!(42.5));
        assert_eq!(value["result"], json!("succeed"));
    }

    #[tokio::test]
    async fn test_list_table_one_section_per_device() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/dl_cgi/devices/list")
            .match_query(Matcher::UrlEncoded("detailed".into(), "false".into()))
            .with_status(200)
            .with_body(
                r#"[
                    {"DEVICE_TYPE": "PVS", "SERIAL": "ZT01"},
                    {"DEVICE_TYPE": "Inverter", "SERIAL": "E00122"}
                ]"#,
            )
            .create_async()
            .await;

        let args = DeviceArgs {
            command: DeviceCommands::List { detailed: false },
        };
        let printed = run_device(args, &client_for(&server), &table_output()).await.unwrap();
        assert!(printed.contains("Device ZT01 (PVS)"));
        assert!(printed.contains("Device E00122 (Inverter)"));
        assert!(printed.ends_with("Found 2 device(s)"));
    }

    #[tokio::test]
    async fn test_meters_keeps_only_meters() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/dl_cgi/devices/list")
            .match_query(Matcher::UrlEncoded("detailed".into(), "true".into()))
            .with_status(200)
            .with_body(
                r#"[
                    {"DEVICE_TYPE": "PVS", "SERIAL": "ZT01", "MODEL": "PV Supervisor PVS6"},
                    {"DEVICE_TYPE": "Power Meter", "SERIAL": "PVS6M0400p", "subtype": "GROSS_PRODUCTION"},
                    {"DEVICE_TYPE": "Inverter", "SERIAL": "E00122"}
                ]"#,
            )
            .create_async()
            .await;

        let args = DeviceArgs {
            command: DeviceCommands::Meters,
        };
        let printed = run_device(args, &client_for(&server), &json_output()).await.unwrap();
        mock.assert_async().await;

        let value: Value = serde_json::from_str(&printed).unwrap();
        let devices = value.as_array().unwrap();
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0]["SERIAL"], json!("PVS6M0400p"));
    }

    #[tokio::test]
    async fn test_discovery_request_defaults() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/dl_cgi/discovery")
            .match_body(Matcher::Json(json!({
                "NumDevices": 200,
                "MIType": "ALL",
                "Device": "all",
                "SaveConfigFile": 0,
                "KeepDevices": 1
            })))
            .with_status(200)
            .with_body(r#"{"result": "succeed"}"#)
            .create_async()
            .await;

        let args = DeviceArgs {
            command: DeviceCommands::StartDiscovery(StartDiscoveryArgs {
                num_devices: 200,
                mi_type: pvs_link_core::protocol::vocabulary::MiType::All,
                device: pvs_link_core::protocol::vocabulary::DiscoveryScope::All,
                interfaces: Vec::new(),
                save_config_file: false,
                keep_devices: true,
            }),
        };
        run_device(args, &client_for(&server), &json_output()).await.unwrap();
        mock.assert_async().await;
    }
}
