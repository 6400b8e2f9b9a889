use super::common::*;
use crate::closet::domain::GarmentCategory;
use crate::outfits::combinations::enumerate_combinations;

#[test]
fn produces_every_top_bottom_pair_plus_every_one_piece() {
    let wardrobe = vec![
        garment("top-1", GarmentCategory::Top, "Red"),
        garment("top-2", GarmentCategory::Top, "White"),
        garment("bottom-1", GarmentCategory::Bottom, "Blue"),
        garment("bottom-2", GarmentCategory::Bottom, "Black"),
        garment("bottom-3", GarmentCategory::Bottom, "Green"),
        garment("dress-1", GarmentCategory::OnePiece, "Yellow"),
        garment("dress-2", GarmentCategory::OnePiece, "Black"),
    ];

    let combinations = enumerate_combinations(&wardrobe).expect("combinations form");
    assert_eq!(combinations.len(), 2 * 3 + 2);

    // Pairs come first, in wardrobe order, then the one-pieces.
    assert_eq!(combinations[0].garments[0].id.0, "garment-top-1");
    assert_eq!(combinations[0].garments[1].id.0, "garment-bottom-1");
    assert_eq!(combinations[5].garments[0].id.0, "garment-top-2");
    assert_eq!(combinations[5].garments[1].id.0, "garment-bottom-3");
    assert_eq!(combinations[6].garments[0].id.0, "garment-dress-1");
    assert_eq!(combinations[7].garments[0].id.0, "garment-dress-2");
}

#[test]
fn appends_only_the_first_item_of_each_optional_category() {
    let wardrobe = vec![
        garment("top", GarmentCategory::Top, "Red"),
        garment("bottom", GarmentCategory::Bottom, "Blue"),
        garment("coat-1", GarmentCategory::Outerwear, "Black"),
        garment("coat-2", GarmentCategory::Outerwear, "White"),
        garment("belt-1", GarmentCategory::Accessory, "Black"),
        garment("belt-2", GarmentCategory::Accessory, "Green"),
        garment("boots", GarmentCategory::Footwear, "Black"),
    ];

    let combinations = enumerate_combinations(&wardrobe).expect("combinations form");
    assert_eq!(combinations.len(), 1);

    let ids: Vec<&str> = combinations[0]
        .garments
        .iter()
        .map(|garment| garment.id.0.as_str())
        .collect();
    assert_eq!(
        ids,
        vec![
            "garment-top",
            "garment-bottom",
            "garment-coat-1",
            "garment-belt-1",
            "garment-boots"
        ]
    );
}

#[test]
fn one_piece_anchors_combine_with_the_same_extras() {
    let wardrobe = vec![
        garment("dress", GarmentCategory::OnePiece, "Yellow"),
        garment("coat", GarmentCategory::Outerwear, "Black"),
    ];

    let combinations = enumerate_combinations(&wardrobe).expect("combinations form");
    assert_eq!(combinations.len(), 1);
    assert_eq!(combinations[0].garments.len(), 2);
    assert_eq!(combinations[0].garments[0].category, GarmentCategory::OnePiece);
    assert_eq!(combinations[0].garments[1].category, GarmentCategory::Outerwear);
}

#[test]
fn empty_wardrobe_cannot_form_combinations() {
    let error = enumerate_combinations(&[]).expect_err("nothing to combine");
    assert_eq!(
        error.to_string(),
        "not enough clothing items: add at least a top and a bottom, or a one-piece"
    );
}

#[test]
fn anchorless_wardrobe_cannot_form_combinations() {
    // Optional categories alone never anchor an outfit.
    let wardrobe = vec![
        garment("coat", GarmentCategory::Outerwear, "Black"),
        garment("boots", GarmentCategory::Footwear, "Black"),
        garment("hat", GarmentCategory::Accessory, "Green"),
    ];
    assert!(enumerate_combinations(&wardrobe).is_err());
}

#[test]
fn tops_without_bottoms_cannot_form_combinations() {
    let wardrobe = vec![
        garment("top-1", GarmentCategory::Top, "Red"),
        garment("top-2", GarmentCategory::Top, "White"),
    ];
    assert!(enumerate_combinations(&wardrobe).is_err());
}
