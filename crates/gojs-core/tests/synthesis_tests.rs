//! Exact-text tests for the manifest and descriptor renderers.

use chrono::DateTime;
use gojs_core::{ExtensionSpec, derive_id, synthesize_descriptor, synthesize_manifest};
use pretty_assertions::assert_eq;

#[test]
fn manifest_for_widgets_scenario() {
    let manifest = synthesize_manifest(
        "gojs_widgets",
        &["gojs_widgets/src/button.js"],
        &["gojs_widgets/assets/style.css", "gojs_widgets/assets/logo.png"],
    );

    assert_eq!(
        manifest,
        "# This file was automatically generated by gojs-gen\n\
         \n\
         page.includeJS.tx_gojswidgets_5c4f = EXT:gojs_widgets/src/button.js\n\
         \n\
         page.includeCSS.tx_gojswidgets_fecf = EXT:gojs_widgets/assets/style.css\n"
    );
}

#[test]
fn manifest_with_scripts_only_has_empty_css_section() {
    let manifest = synthesize_manifest::<&str>(
        "gojs_widgets",
        &["gojs_widgets/src/a.js", "gojs_widgets/src/b.js"],
        &[],
    );

    assert_eq!(
        manifest,
        "# This file was automatically generated by gojs-gen\n\
         \n\
         page.includeJS.tx_gojswidgets_d4f9 = EXT:gojs_widgets/src/a.js\n\
         page.includeJS.tx_gojswidgets_21d7 = EXT:gojs_widgets/src/b.js\n\
         \n"
    );
}

#[test]
fn manifest_ids_match_deriver() {
    let path = "gojs_widgets/assets/style.css";
    let manifest = synthesize_manifest("gojs_widgets", &[], &[path]);
    let expected = format!("page.includeCSS.{} = EXT:{}", derive_id("gojs_widgets", path), path);
    assert!(manifest.lines().any(|l| l == expected));
}

#[test]
fn descriptor_snapshot() {
    let spec = ExtensionSpec::new("widgets", "1.0.0", "Jane", "Widgets").unwrap();
    let generated_at = DateTime::parse_from_rfc3339("2024-03-05T14:07:09+01:00").unwrap();

    insta::assert_snapshot!(synthesize_descriptor(&spec, &generated_at), @r"
<?php

# Extension Manager/Repository config file for ext 'gojs_widgets'.
# Auto generated at 2024-03-05T14:07:09+01:00

$EM_CONF[$_EXTKEY] = array(
  'title' => 'Widgets',
  'description' => '',
  'category' => 'plugin',
  'author' => 'Jane',
  'author_email' => 'web@gosign.de',
  'shy' => '',
  'dependencies' => '',
  'conflicts' => '',
  'priority' => '',
  'module' => '',
  'state' => 'beta',
  'internal' => '',
  'uploadfolder' => 0,
  'createDirs' => '',
  'modify_tables' => '',
  'clearCacheOnLoad' => 0,
  'lockType' => '',
  'author_company' => 'Gosign media. GmbH',
  'version' => '1.0.0',
  'constraints' => array(
    'depends' => array(),
    'conflicts' => array(),
    'suggests' => array(),
  ),
  '_md5_values_when_last_written' => '',
  'suggests' => array(),
);
");
}

#[test]
fn descriptor_never_drops_supplied_values() {
    let spec = ExtensionSpec::new("k", "0.0.1-rc.2", "Ana Lima", "Charts & Maps").unwrap();
    let generated_at = DateTime::parse_from_rfc3339("2020-01-01T00:00:00+00:00").unwrap();
    let php = synthesize_descriptor(&spec, &generated_at);

    assert!(php.contains("'title' => 'Charts & Maps',"));
    assert!(php.contains("'author' => 'Ana Lima',"));
    assert!(php.contains("'version' => '0.0.1-rc.2',"));
    assert!(!php.contains("'title' => '',"));
}
