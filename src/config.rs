// © 2026 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kdl::KdlDocument;
use miette::{IntoDiagnostic, Result, bail};
use tokio::fs::read_to_string;

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	parse_config_document(&config_file_contents)
}

pub fn parse_config_document(contents: &str) -> Result<ConfigData> {
	let document: KdlDocument = contents.parse()?;

	let Some(web_node) = document.get("web") else {
		bail!("Config is missing the web block");
	};
	let Some(web_children) = web_node.children() else {
		bail!("The web block has no settings");
	};

	let Some(bind_addr) = web_children.get_arg("bind_addr") else {
		bail!("Config is missing web.bind_addr");
	};
	let Some(bind_addr) = bind_addr.as_string() else {
		bail!("web.bind_addr must be a string");
	};

	let web = WebConfig {
		bind_addr: bind_addr.to_string(),
	};
	Ok(ConfigData { web })
}

#[derive(Debug)]
pub struct ConfigData {
	pub web: WebConfig,
}

#[derive(Debug)]
pub struct WebConfig {
	pub bind_addr: String,
}
