//! PCS command implementation.

use pvs_link_core::protocol::records::PcsSettings;
use pvs_link_core::GatewayClient;

use crate::cli::{PcsArgs, PcsCommands, UpdatePcsArgs};
use crate::error::{CliError, Result};
use crate::input;
use crate::output::{render, OutputFormatter};

/// Run the pcs command
pub async fn run_pcs(
    args: PcsArgs,
    client: &GatewayClient,
    output: &dyn OutputFormatter,
) -> Result<String> {
    match args.command {
        PcsCommands::GetSettings => render(output, &client.pcs_settings().await?),
        PcsCommands::UpdateSettings(args) => {
            let settings = pcs_settings(args)?;
            render(output, &client.update_pcs_settings(&settings).await?)
        }
    }
}

fn pcs_settings(args: UpdatePcsArgs) -> Result<PcsSettings> {
    input::file_or_flags(args.config_file.as_deref(), || {
        let settings = PcsSettings {
            main_service_panel_breaker: args.main_service_panel_breaker,
            main_service_panel_busbar: args.main_service_panel_busbar,
            hubplus_breaker: args.hubplus_breaker,
            hubplus_busbar: args.hubplus_busbar,
            enable_pcs: args.enable_pcs,
        };
        if settings.is_empty() {
            return Err(CliError::Usage(
                "give --config-file or at least one PCS setting".to_string(),
            ));
        }
        Ok(settings)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{client_for, json_output};
    use mockito::Matcher;
    use serde_json::json;

    fn update(args: UpdatePcsArgs) -> PcsArgs {
        PcsArgs {
            command: PcsCommands::UpdateSettings(args),
        }
    }

    fn no_fields() -> UpdatePcsArgs {
        UpdatePcsArgs {
            config_file: None,
            main_service_panel_breaker: None,
            main_service_panel_busbar: None,
            hubplus_breaker: None,
            hubplus_busbar: None,
            enable_pcs: None,
        }
    }

    #[tokio::test]
    async fn test_update_needs_a_field() {
        let server = mockito::Server::new_async().await;
        let err = run_pcs(update(no_fields()), &client_for(&server), &json_output())
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
    }

    #[tokio::test]
    async fn test_partial_update() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/dl_cgi/pcs/settings")
            .match_body(Matcher::Json(json!({"hubplus_breaker": 100, "enable_pcs": true})))
            .with_status(200)
            .with_body(r#"{"status": "ok"}"#)
            .create_async()
            .await;

        let mut args = no_fields();
        args.hubplus_breaker = Some(100);
        args.enable_pcs = Some(true);
        run_pcs(update(args), &client_for(&server), &json_output())
            .await
            .unwrap();
        mock.assert_async().await;
    }
}
