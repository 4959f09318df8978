//! Shape of the final configuration per lifecycle token.

use std::path::{Path, PathBuf};

use kiln_config::{
    base_config, build_config, resolve_config, validate_schema, ConfigError, ConfigInputs,
    DependencyManifest, DevServer, Devtool, EntryPoint, LifecycleEnv, Loader, Mode, PathTable,
    Plugin, ProjectSettings, StatsPreset,
};

struct Fixture {
    env: LifecycleEnv,
    manifest: DependencyManifest,
    paths: PathTable,
    settings: ProjectSettings,
}

impl Fixture {
    fn new(lifecycle: Option<&str>) -> Self {
        let mut vars = vec![("HOST", "0.0.0.0"), ("PORT", "3000")];
        if let Some(token) = lifecycle {
            vars.push(("npm_lifecycle_event", token));
        }
        Self {
            env: LifecycleEnv::from_vars(vars),
            manifest: DependencyManifest::with_dependencies([
                ("alt", "^0.18.4"),
                ("react", "^15.1.0"),
                ("react-dom", "^15.1.0"),
            ]),
            paths: PathTable::new("/work/kanban"),
            settings: ProjectSettings::default(),
        }
    }

    fn inputs(&self) -> ConfigInputs<'_> {
        ConfigInputs {
            env: &self.env,
            manifest: &self.manifest,
            paths: &self.paths,
            settings: &self.settings,
        }
    }
}

fn style_loaders(config: &kiln_config::BundleConfig) -> Vec<Vec<Loader>> {
    config
        .module
        .rules
        .iter()
        .filter(|r| r.test.as_str() == r"\.css$")
        .map(|r| r.loaders.clone())
        .collect()
}

#[test]
fn start_token_selects_dev_server_and_style_injection() {
    for token in [Some("start"), None] {
        let fixture = Fixture::new(token);
        let resolved = resolve_config(&fixture.inputs()).unwrap();
        let config = resolved.bundle;

        assert_eq!(resolved.mode, Mode::Development);
        assert!(config.dev_server.is_some());
        assert_eq!(style_loaders(&config), vec![vec![Loader::Style, Loader::Css]]);
        assert!(!config.has_plugin("commons-chunk"));
        assert!(!config.has_plugin("extract-css"));
        assert!(!config.entry.contains_key("vendor"));
    }
}

#[test]
fn development_settings_follow_environment() {
    let fixture = Fixture::new(Some("start"));
    let config = build_config(Mode::Development, &fixture.inputs()).unwrap();

    assert_eq!(config.devtool, Some(Devtool::EvalSourceMap));
    assert_eq!(
        config.dev_server,
        Some(DevServer {
            history_api_fallback: true,
            hot: true,
            inline: true,
            progress: true,
            stats: StatsPreset::ErrorsOnly,
            host: Some("0.0.0.0".into()),
            port: Some(3000),
        })
    );
    assert_eq!(
        config.plugins.iter().map(Plugin::name).collect::<Vec<_>>(),
        vec!["html-shell", "hot-module-replacement", "auto-install"]
    );
    assert!(config.plugins.contains(&Plugin::AutoInstall { save: true }));
}

#[test]
fn build_and_stats_tokens_select_vendor_split() {
    for token in ["build", "stats"] {
        let fixture = Fixture::new(Some(token));
        let resolved = resolve_config(&fixture.inputs()).unwrap();
        let config = resolved.bundle;

        assert_eq!(resolved.mode, Mode::Production);
        assert_eq!(resolved.babel_env.as_deref(), Some(token));
        assert_eq!(
            config.entry["vendor"],
            EntryPoint::Modules(vec!["alt".into(), "react".into(), "react-dom".into()])
        );
        assert!(config.has_plugin("extract-css"));
        assert!(config.dev_server.is_none());
        assert!(config.devtool.is_none());
    }
}

#[test]
fn production_plugins_in_order() {
    let fixture = Fixture::new(Some("build"));
    let config = build_config(Mode::Production, &fixture.inputs()).unwrap();

    assert_eq!(
        config.plugins.iter().map(Plugin::name).collect::<Vec<_>>(),
        vec![
            "html-shell",
            "extract-css",
            "clean-output",
            "commons-chunk",
            "define",
            "minify"
        ]
    );
    assert!(config.plugins.contains(&Plugin::ExtractCss {
        filename: "[name].[chunkhash].css".into()
    }));
    assert!(config.plugins.contains(&Plugin::CleanOutput {
        paths: vec![PathBuf::from("/work/kanban/build")]
    }));
    assert!(config.plugins.contains(&Plugin::node_env("production")));
    assert_eq!(
        style_loaders(&config),
        vec![vec![
            Loader::ExtractCss {
                fallback: Box::new(Loader::Style)
            },
            Loader::Css
        ]]
    );
}

#[test]
fn unknown_token_is_rejected() {
    let fixture = Fixture::new(Some("test"));
    let err = resolve_config(&fixture.inputs()).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownMode(ref t) if t == "test"));
}

#[test]
fn base_entries_are_app_and_style_in_every_mode() {
    let fixture = Fixture::new(None);
    let base = base_config(&fixture.paths, &fixture.settings);
    assert_eq!(base.entry.keys().collect::<Vec<_>>(), vec!["app", "style"]);

    for mode in [Mode::Development, Mode::Production] {
        let config = build_config(mode, &fixture.inputs()).unwrap();
        assert_eq!(config.entry["app"], EntryPoint::Path("/work/kanban/app".into()));
        assert_eq!(
            config.entry["style"],
            EntryPoint::Path("/work/kanban/app/main.css".into())
        );
    }
}

#[test]
fn filename_patterns_differ_by_mode() {
    let fixture = Fixture::new(None);
    let dev = build_config(Mode::Development, &fixture.inputs()).unwrap();
    let prod = build_config(Mode::Production, &fixture.inputs()).unwrap();

    assert_eq!(dev.output.filename, "[name].js");
    assert!(dev.output.chunk_filename.is_none());
    assert!(!dev.uses_content_hash());

    assert_eq!(prod.output.filename, "[name].[chunkhash].js");
    assert_eq!(prod.output.chunk_filename.as_deref(), Some("[chunkhash].js"));
    assert!(prod.uses_content_hash());
    assert_eq!(dev.output.path, prod.output.path);
}

#[test]
fn script_rule_survives_every_merge() {
    let fixture = Fixture::new(None);
    for mode in [Mode::Development, Mode::Production] {
        let config = build_config(mode, &fixture.inputs()).unwrap();
        let first = &config.module.rules[0];
        assert_eq!(first.test.as_str(), r"\.jsx?$");
        assert_eq!(first.loaders, vec![Loader::Babel { cache_directory: true }]);
        assert_eq!(first.include, PathBuf::from("/work/kanban/app"));
        assert_eq!(config.module.rules.len(), 2);
        validate_schema(&config).unwrap();
    }
}

#[test]
fn rules_for_routes_sources() {
    let fixture = Fixture::new(Some("start"));
    let config = build_config(Mode::Development, &fixture.inputs()).unwrap();

    let css: Vec<_> = config
        .rules_for(Path::new("/work/kanban/app/main.css"))
        .map(|r| r.pipeline())
        .collect();
    assert_eq!(css, vec!["style!css"]);

    let jsx: Vec<_> = config
        .rules_for(Path::new("/work/kanban/app/components/Note.jsx"))
        .map(|r| r.pipeline())
        .collect();
    assert_eq!(jsx, vec!["babel"]);

    assert_eq!(
        config
            .rules_for(Path::new("/work/kanban/node_modules/react/react.js"))
            .count(),
        0
    );
}

#[test]
fn production_without_dependencies_object_fails() {
    let mut fixture = Fixture::new(Some("build"));
    fixture.manifest =
        DependencyManifest::from_json_str(r#"{ "name": "kanban" }"#, "package.json").unwrap();

    let err = resolve_config(&fixture.inputs()).unwrap_err();
    assert!(matches!(err, ConfigError::MissingDependencies(_)));

    // development never reads the dependency list
    fixture.env = LifecycleEnv::from_vars([("npm_lifecycle_event", "start")]);
    assert!(resolve_config(&fixture.inputs()).is_ok());
}

#[test]
fn invalid_port_fails_development_only() {
    let mut fixture = Fixture::new(Some("start"));
    fixture.env.port = Some("http".into());
    assert!(matches!(
        build_config(Mode::Development, &fixture.inputs()),
        Err(ConfigError::InvalidPort { .. })
    ));
    assert!(build_config(Mode::Production, &fixture.inputs()).is_ok());
}

#[test]
fn html_title_comes_from_settings() {
    let mut fixture = Fixture::new(None);
    fixture.settings.html_title = "Kanban".into();
    let config = build_config(Mode::Development, &fixture.inputs()).unwrap();
    assert_eq!(config.plugins[0], Plugin::HtmlShell { title: "Kanban".into() });
}

#[test]
fn serialized_config_uses_bundler_field_names() {
    let fixture = Fixture::new(Some("start"));
    let value = build_config(Mode::Development, &fixture.inputs())
        .unwrap()
        .to_value()
        .unwrap();

    assert_eq!(value["devtool"], "eval-source-map");
    assert_eq!(value["devServer"]["historyApiFallback"], true);
    assert_eq!(value["devServer"]["stats"], "errors-only");
    assert_eq!(value["devServer"]["port"], 3000);
    assert_eq!(value["module"]["rules"][0]["test"], r"\.jsx?$");
}

#[test]
fn empty_host_leaves_dev_server_unbound() {
    let mut fixture = Fixture::new(Some("start"));
    fixture.env = LifecycleEnv::from_vars([("npm_lifecycle_event", "start"), ("HOST", "")]);
    let value = build_config(Mode::Development, &fixture.inputs())
        .unwrap()
        .to_value()
        .unwrap();

    let dev_server = value["devServer"].as_object().unwrap();
    assert!(!dev_server.contains_key("host"));
    assert!(!dev_server.contains_key("port"));
    assert_eq!(dev_server["hot"], true);
}
