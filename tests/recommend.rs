//! End-to-end scenarios over the sample song catalog.

use rateseek::{Engine, RatingsMatrix, SeekError};

fn song_engine() -> Engine {
    let labels: Vec<String> = [
        "Blinding Lights - The Weeknd",
        "Shape of You - Ed Sheeran",
        "Someone You Loved - Lewis Capaldi",
        "Levitating - Dua Lipa",
        "Bad Habits - Ed Sheeran",
        "Stay - The Kid LAROI & Justin Bieber",
        "Peaches - Justin Bieber",
        "As It Was - Harry Styles",
        "Senorita - Shawn Mendes & Camila Cabello",
        "Watermelon Sugar - Harry Styles",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let matrix = RatingsMatrix::from_rows(vec![
        vec![5.0, 4.0, 3.0, 5.0, 4.0, 5.0, 2.0, 3.0, 4.0, 4.0],
        vec![4.0, 5.0, 4.0, 4.0, 5.0, 5.0, 3.0, 3.0, 4.0, 3.0],
        vec![1.0, 2.0, 5.0, 1.0, 1.0, 2.0, 5.0, 4.0, 2.0, 2.0],
        vec![5.0, 5.0, 3.0, 4.0, 5.0, 5.0, 4.0, 3.0, 5.0, 4.0],
        vec![2.0, 1.0, 5.0, 1.0, 1.0, 2.0, 4.0, 5.0, 1.0, 2.0],
        vec![4.0, 4.0, 2.0, 5.0, 4.0, 4.0, 3.0, 2.0, 4.0, 3.0],
    ])
    .unwrap();

    Engine::new(matrix, labels).unwrap()
}

#[test]
fn top_three_for_blinding_lights() {
    let engine = song_engine();
    let ranking = engine.recommend(0, 3).unwrap();

    assert_eq!(ranking.len(), 3);
    for item in &ranking {
        assert!(item.score >= -1.0 && item.score <= 1.0);
    }
    assert!(ranking[0].score >= ranking[1].score);
    assert!(ranking[1].score >= ranking[2].score);
}

#[test]
fn target_never_recommends_itself() {
    let engine = song_engine();
    for target in 0..engine.item_count() {
        let ranking = engine.recommend(target, 3).unwrap();
        let target_label = engine.label(target).unwrap();
        assert!(ranking.iter().all(|r| r.label != target_label));
    }
}

#[test]
fn ranking_length_is_min_of_top_n_and_rest_of_catalog() {
    let engine = song_engine();
    assert_eq!(engine.recommend(0, 3).unwrap().len(), 3);
    assert_eq!(engine.recommend(0, 20).unwrap().len(), 9);
    assert_eq!(engine.recommend(0, 9).unwrap().len(), 9);
}

#[test]
fn out_of_range_target_fails() {
    let engine = song_engine();
    match engine.recommend(11, 3) {
        Err(SeekError::IndexOutOfRange { index, items }) => {
            assert_eq!(index, 11);
            assert_eq!(items, 10);
        }
        other => panic!("expected IndexOutOfRange, got {:?}", other),
    }
}

#[test]
fn zero_top_n_yields_empty_ranking() {
    let engine = song_engine();
    assert!(engine.recommend(5, 0).unwrap().is_empty());
}

#[test]
fn full_catalog_ranking_is_descending_everywhere() {
    let engine = song_engine();
    for ranking in engine.recommend_all(9).unwrap() {
        assert_eq!(ranking.len(), 9);
        for pair in ranking.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }
}
