//! End-to-end segmentation over realistic article text.

use fraza_core::{
    AbbreviationSet, BoundaryDetector, CoreError, DetectorError, RuleDetector, Segmenter,
    Serialized, Span,
};
use std::sync::Arc;

#[test]
fn segments_a_news_paragraph_with_the_bundled_list() {
    let segmenter = Segmenter::new(AbbreviationSet::bundled_ru());
    let text = "В Чебоксарах 12 мая открылась выставка. Куратор: И. П. Смирнова. \
                Вход стоит 150 руб. для студентов и др. льготников. \
                Выставка продлится до конца года.";
    let sentences = segmenter.detect_sentences(text).unwrap();
    assert_eq!(
        sentences,
        vec![
            "В Чебоксарах 12 мая открылась выставка.",
            "Куратор: И. П. Смирнова.",
            "Вход стоит 150 руб. для студентов и др. льготников.",
            "Выставка продлится до конца года.",
        ]
    );
}

#[test]
fn scraped_markup_noise_is_normalized_away() {
    let segmenter = Segmenter::new(AbbreviationSet::bundled_ru());
    let text = "\u{FEFF}«Новость   дня»\n— так\tназвали материал. Публикация вышла вчера.";
    let sentences = segmenter.detect_sentences(text).unwrap();
    assert_eq!(
        sentences,
        vec![
            "\"Новость дня\" - так назвали материал.",
            "Публикация вышла вчера.",
        ]
    );
}

#[test]
fn three_initials_are_restored_with_spaces() {
    let segmenter = Segmenter::new(AbbreviationSet::bundled_ru());
    let sentences = segmenter
        .detect_sentences("Доклад читал А. Б. В. Петров. Зал аплодировал.")
        .unwrap();
    assert_eq!(
        sentences,
        vec!["Доклад читал А. Б. В. Петров.", "Зал аплодировал."]
    );
}

#[test]
fn shared_segmenter_is_usable_from_many_threads() {
    let segmenter = Arc::new(Segmenter::new(AbbreviationSet::bundled_ru()));
    let text = "Первое предложение. Второе предложение. Третье предложение.";

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let segmenter = Arc::clone(&segmenter);
            std::thread::spawn(move || segmenter.detect_sentences(text).unwrap())
        })
        .collect();

    for handle in handles {
        let sentences = handle.join().unwrap();
        assert_eq!(sentences.len(), 3);
    }
}

#[test]
fn serialized_detector_plugs_into_the_builder() {
    let segmenter = Segmenter::builder()
        .abbreviations(AbbreviationSet::bundled_ru())
        .detector(Serialized::new(RuleDetector::new()))
        .build()
        .unwrap();
    let sentences = segmenter
        .detect_sentences("Один тезис здесь. Другой тезис там.")
        .unwrap();
    assert_eq!(sentences, vec!["Один тезис здесь.", "Другой тезис там."]);
}

#[test]
fn unavailable_detector_surfaces_as_core_error() {
    struct Offline;
    impl BoundaryDetector for Offline {
        fn detect(&self, _: &str) -> Result<Vec<Span>, DetectorError> {
            Err(DetectorError::Unavailable("model file not mounted".into()))
        }
    }

    let segmenter = Segmenter::builder()
        .abbreviations(AbbreviationSet::default())
        .detector(Offline)
        .build()
        .unwrap();
    let error = segmenter.detect_sentences("Любой текст.").unwrap_err();
    assert!(matches!(error, CoreError::Detector(_)));
    assert!(error.to_string().contains("model file not mounted"));
}

#[test]
fn mask_and_unmask_are_exposed_on_the_segmenter() {
    let segmenter = Segmenter::new(AbbreviationSet::from_lines(["руб."]));
    let masked = segmenter.mask("Цена 100 руб. сегодня");
    assert_eq!(masked, "Цена 100 руб<DOT> сегодня");
    assert_eq!(segmenter.unmask(&masked), "Цена 100 руб. сегодня");
}
