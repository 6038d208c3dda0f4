use proptest::prelude::*;
use tumble_blocks::config::FamiliesConfig;
use tumble_blocks::material::MaterialCatalog;
use tumble_blocks::registry::FamilyRegistry;
use tumble_blocks::{BlockError, BlockUri, FaceMaterialTransformer, MaterialId};
use tumble_geom::Face;

const MATERIALS: &str = r#"
    [materials]
    pip_one = ["assets/dice/one.png"]
    pip_two = ["assets/dice/two.png"]
    pip_three = ["assets/dice/three.png"]
    pip_four = ["assets/dice/four.png"]
    pip_five = ["assets/dice/five.png"]
    pip_six = ["assets/dice/six.png"]
    stone = ["assets/stone.png"]
    unknown = ["assets/unknown.png"]
"#;

const FAMILIES: &str = r#"
    unknown_material = "unknown"

    [[families]]
    uri = "tutorial:stone"
    shape = { faces = { all = "stone" } }

    [[families]]
    uri = "tutorial:dice"
    kind = "dice"
    rotate_on_activate = true
    shape = { name = "cube", mode = "fixed", faces = { top = "pip_one", bottom = "pip_six", front = "pip_two", back = "pip_five", left = "pip_three", right = "pip_four" } }

    [[families]]
    uri = "tutorial:loaded_dice"
    kind = "dice"
    shape = { faces = { all = "pip_six", top = "missing_material" } }
"#;

fn registry() -> FamilyRegistry {
    let materials = MaterialCatalog::from_toml_str(MATERIALS).unwrap();
    let cfg: FamiliesConfig = toml::from_str(FAMILIES).unwrap();
    FamilyRegistry::from_configs(materials, cfg, &FaceMaterialTransformer).expect("registry")
}

#[test]
fn material_catalog_reserves_zero_id_for_sentinel() {
    let materials = MaterialCatalog::from_toml_str(MATERIALS).unwrap();
    assert!(materials.materials[0].key.is_empty());
    let one = materials.get_id("pip_one").unwrap();
    assert!(one.0 > 0);
    // keys are sorted before ids are assigned
    assert!(materials.get_id("pip_five").unwrap().0 < materials.get_id("pip_one").unwrap().0);
}

#[test]
fn families_register_in_declaration_order() {
    let reg = registry();
    assert_eq!(reg.len(), 3);
    assert_eq!(reg.id_by_uri(&BlockUri::family("tutorial:stone")), Some(0));
    assert_eq!(reg.id_by_uri(&BlockUri::family("tutorial:dice")), Some(1));
    assert_eq!(
        reg.id_by_uri(&BlockUri::family("tutorial:dice").with_identifier("BACK-TOP")),
        Some(1)
    );
    assert!(!reg.rotates_on_activate(0));
    assert!(reg.rotates_on_activate(1));
    assert!(!reg.rotates_on_activate(2));
    assert!(!reg.rotates_on_activate(99));
    assert_eq!(reg.get(1).unwrap().blocks().len(), 24);
    assert_eq!(reg.get(0).unwrap().blocks().len(), 1);
}

#[test]
fn unknown_material_falls_back() {
    let reg = registry();
    let unknown = reg.materials.get_id("unknown").unwrap();
    let six = reg.materials.get_id("pip_six").unwrap();
    let loaded = reg.get(2).unwrap().archetype();
    assert_eq!(loaded.shape().material(Face::Top), unknown);
    assert_eq!(loaded.shape().material(Face::Front), six);
    assert_ne!(unknown, MaterialId(0));
}

#[test]
fn dice_faces_follow_rotation() {
    let reg = registry();
    let one = reg.materials.get_id("pip_one").unwrap();
    let two = reg.materials.get_id("pip_two").unwrap();
    let v = reg.variant_for_uri_str("tutorial:dice:FRONT-BOTTOM").unwrap();
    assert_eq!(v.shape().material(Face::Top), two);
    assert_eq!(v.shape().material(Face::Back), one);
}

#[test]
fn uri_lookups_never_fail_loudly() {
    let reg = registry();
    let arch = reg.get(1).unwrap().archetype();
    assert_eq!(reg.variant_for_uri_str("tutorial:dice"), Some(arch));
    assert_eq!(reg.variant_for_uri_str("tutorial:dice:TOP-FRONT"), Some(arch));
    assert!(reg.variant_for_uri_str("tutorial:dice:TOP-BOTTOM").is_none());
    assert!(reg.variant_for_uri_str("tutorial:dice:toast").is_none());
    assert!(reg.variant_for_uri_str("tutorial:nothing:TOP-FRONT").is_none());
    assert!(reg.variant_for_uri_str("toast").is_none());
}

#[test]
fn placement_through_registry() {
    let reg = registry();
    let b = reg.block_for_placement(1, Face::Back, Face::Front).unwrap();
    let v = reg.variant_for_block(b).unwrap();
    assert_eq!(v.uri().identifier(), Some("BACK-TOP"));
    assert!(matches!(
        reg.block_for_placement(42, Face::Top, Face::Front),
        Err(BlockError::UnknownFamily(_))
    ));
}

#[test]
fn duplicate_and_bad_configs_are_rejected() {
    let dup = r#"
        [[families]]
        uri = "tutorial:dice"
        kind = "dice"
        [[families]]
        uri = "tutorial:dice"
    "#;
    let cfg: FamiliesConfig = toml::from_str(dup).unwrap();
    let err = FamilyRegistry::from_configs(MaterialCatalog::new(), cfg, &FaceMaterialTransformer)
        .unwrap_err();
    assert!(matches!(err, BlockError::DuplicateFamily(_)));

    let bad_kind = r#"
        [[families]]
        uri = "tutorial:dice"
        kind = "d20"
    "#;
    let cfg: FamiliesConfig = toml::from_str(bad_kind).unwrap();
    let err = FamilyRegistry::from_configs(MaterialCatalog::new(), cfg, &FaceMaterialTransformer)
        .unwrap_err();
    assert!(matches!(err, BlockError::UnknownFamilyKind { .. }));

    let freeform = r#"
        [[families]]
        uri = "tutorial:dice"
        kind = "dice"
        shape = { mode = "freeform" }
    "#;
    let cfg: FamiliesConfig = toml::from_str(freeform).unwrap();
    let err = FamilyRegistry::from_configs(MaterialCatalog::new(), cfg, &FaceMaterialTransformer)
        .unwrap_err();
    assert!(matches!(err, BlockError::UnsupportedShapeMode { .. }));

    let variant_uri = r#"
        [[families]]
        uri = "tutorial:dice:TOP-FRONT"
    "#;
    let cfg: FamiliesConfig = toml::from_str(variant_uri).unwrap();
    let err = FamilyRegistry::from_configs(MaterialCatalog::new(), cfg, &FaceMaterialTransformer)
        .unwrap_err();
    assert!(matches!(err, BlockError::InvalidUri(_)));
}

proptest! {
    // Arbitrary text never panics and only resolves to variants that round-trip.
    #[test]
    fn arbitrary_uri_text_is_safe(s in "\\PC{0,40}") {
        let reg = registry();
        if let Some(v) = reg.variant_for_uri_str(&s) {
            prop_assert_eq!(reg.variant_for_block(v.block()), Some(v));
        }
    }

    // Every variant is reachable through its own URI and its compact block.
    #[test]
    fn variant_uri_and_block_round_trip(idx in 0usize..24) {
        let reg = registry();
        let v = &reg.get(1).unwrap().blocks()[idx];
        prop_assert_eq!(reg.variant_for_uri(v.uri()), Some(v));
        prop_assert_eq!(reg.variant_for_block(v.block()), Some(v));
        prop_assert_eq!(reg.block_for_uri(v.uri()), Some(v.block()));
    }

    // Identifier-shaped strings resolve exactly when they name a catalog pair.
    #[test]
    fn identifier_text_matches_catalog(top in 0usize..6, front in 0usize..6) {
        let reg = registry();
        let (t, f) = (Face::ALL[top], Face::ALL[front]);
        let text = format!("tutorial:dice:{}-{}", t, f);
        let found = reg.variant_for_uri_str(&text);
        let expected = tumble_blocks::catalog::rotation_for(t, f).is_ok();
        prop_assert_eq!(found.is_some(), expected);
    }
}

#[test]
fn shipped_assets_load() {
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let assets = root.join("../../assets");
    let reg = FamilyRegistry::load_from_paths(
        assets.join("materials.toml"),
        assets.join("families.toml"),
        &FaceMaterialTransformer,
    )
    .expect("assets");
    let dice = reg.id_by_uri(&BlockUri::family("tutorial:dice")).unwrap();
    assert!(reg.rotates_on_activate(dice));
    assert_eq!(reg.get(dice).unwrap().blocks().len(), 24);
    assert!(reg.variant_for_uri_str("tutorial:dice:LEFT-FRONT").is_some());
}
