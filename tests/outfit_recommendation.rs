//! Integration specifications for the wardrobe intake and outfit
//! recommendation workflow, driven through the public service facades
//! and HTTP routers only.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use wardrobe_ai::catalog::RuleCatalog;
    use wardrobe_ai::closet::{
        ClosetService, Garment, GarmentDraft, OwnerId, RepositoryError, WardrobeRepository,
    };
    use wardrobe_ai::outfits::RecommendationService;

    #[derive(Default, Clone)]
    pub struct MemoryWardrobe {
        documents: Arc<Mutex<HashMap<String, Vec<Garment>>>>,
    }

    impl WardrobeRepository for MemoryWardrobe {
        fn load(&self, owner: &OwnerId) -> Result<Vec<Garment>, RepositoryError> {
            let guard = self.documents.lock().expect("wardrobe mutex poisoned");
            Ok(guard.get(&owner.0).cloned().unwrap_or_default())
        }

        fn store(&self, owner: &OwnerId, wardrobe: &[Garment]) -> Result<(), RepositoryError> {
            let mut guard = self.documents.lock().expect("wardrobe mutex poisoned");
            guard.insert(owner.0.clone(), wardrobe.to_vec());
            Ok(())
        }
    }

    pub fn owner() -> OwnerId {
        OwnerId("ava".to_string())
    }

    pub fn draft(name: &str, color: &str, pattern: &str, fabric: &str) -> GarmentDraft {
        GarmentDraft {
            name: name.to_string(),
            color: color.to_string(),
            pattern: pattern.to_string(),
            fabric: fabric.to_string(),
            texture: "Cotton".to_string(),
            structure: "Fitted".to_string(),
            image_ref: format!("file:///images/{}.jpg", name.replace(' ', "-")),
        }
    }

    pub fn build_services() -> (
        ClosetService<MemoryWardrobe>,
        Arc<RecommendationService<MemoryWardrobe>>,
    ) {
        let repository = Arc::new(MemoryWardrobe::default());
        let catalog = Arc::new(RuleCatalog::builtin().expect("builtin tables parse"));
        let closet = ClosetService::new(repository.clone());
        let recommendations = Arc::new(RecommendationService::new(repository, catalog));
        (closet, recommendations)
    }
}

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use common::*;
use wardrobe_ai::outfits::{outfits_router, ContextSelection};

#[test]
fn catalogued_garments_flow_into_ranked_recommendations() {
    let (closet, recommendations) = build_services();
    let owner = owner();

    closet
        .add_garment(&owner, draft("red shirt", "Red", "Solid", "Smooth"))
        .expect("top saved");
    closet
        .add_garment(&owner, draft("blue jeans", "Blue", "Solid", "Smooth"))
        .expect("bottom saved");
    closet
        .add_garment(&owner, draft("black coat", "Black", "Solid", "Rough"))
        .expect("outerwear saved");

    let selection = ContextSelection {
        skin_tone: "Olive".to_string(),
        occasion: "Party".to_string(),
        weather: "Winter".to_string(),
        body_type: "Hourglass".to_string(),
    };

    let ranked = recommendations
        .recommend(&owner, selection)
        .expect("recommendation runs");

    // One top x one bottom, with the coat appended.
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].combination.garments.len(), 3);
    assert_eq!(ranked[0].score, 66);
    assert_eq!(ranked[0].reasons.len(), 8);
}

#[test]
fn removing_the_anchor_makes_the_wardrobe_insufficient() {
    let (closet, recommendations) = build_services();
    let owner = owner();

    let top = closet
        .add_garment(&owner, draft("red shirt", "Red", "Solid", "Smooth"))
        .expect("top saved");
    closet
        .add_garment(&owner, draft("black coat", "Black", "Solid", "Rough"))
        .expect("outerwear saved");

    closet.remove_garment(&owner, &top.id).expect("top removed");

    let error = recommendations
        .recommend(&owner, ContextSelection::default())
        .expect_err("no anchor garment remains");
    assert_eq!(
        error.to_string(),
        "not enough clothing items: add at least a top and a bottom, or a one-piece"
    );
}

#[tokio::test]
async fn recommendation_endpoint_serves_the_ranked_list() {
    let (closet, recommendations) = build_services();
    let owner = owner();

    closet
        .add_garment(&owner, draft("red shirt", "Red", "Solid", "Smooth"))
        .expect("top saved");
    closet
        .add_garment(&owner, draft("blue jeans", "Blue", "Solid", "Smooth"))
        .expect("bottom saved");

    let app = outfits_router(recommendations);
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/wardrobe/ava/outfits")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "occasion": "Party" }).to_string()))
                .expect("request builds"),
        )
        .await
        .expect("request handled");
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    let body: serde_json::Value = serde_json::from_slice(&body).expect("json payload");

    let outfits = body["outfits"].as_array().expect("outfit list");
    assert_eq!(outfits.len(), 1);
    // Red sits in the party color range, on top of the garment-only bonuses.
    assert_eq!(outfits[0]["score"], 43);
    assert_eq!(outfits[0]["reasons"][4], "Color matches occasion");
}
