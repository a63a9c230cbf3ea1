//! Tests for the run state machine, using mock providers.

mod test_utils;

use hokusai_core::{ComicBrief, Part, ReferenceImage};
use hokusai_error::{HokusaiError, HokusaiErrorKind, StudioErrorKind};
use hokusai_storage::FileSystemPageStore;
use hokusai_studio::ComicDirector;
use tempfile::TempDir;
use test_utils::{
    outline_with_pages, png_bytes, MockImageStudio, MockPlotWriter, MockTurn, RecordingProgress,
};

fn studio_kind(err: HokusaiError) -> StudioErrorKind {
    match err.kind() {
        HokusaiErrorKind::Studio(studio) => studio.kind.clone(),
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[tokio::test]
async fn test_full_run_generates_and_composites() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileSystemPageStore::new(temp_dir.path())?;
    let images = MockImageStudio::new_sequence(vec![
        MockTurn::Image(png_bytes(40, 30, [255, 0, 0, 255])),
        MockTurn::Image(png_bytes(40, 50, [0, 0, 255, 255])),
    ]);
    let progress = RecordingProgress::new();

    let director = ComicDirector::new(
        MockPlotWriter::new_success(outline_with_pages(2)),
        images.clone(),
        store,
    )
    .with_progress(Box::new(progress.clone()));

    let brief = ComicBrief::builder()
        .theme("High school rom-com")
        .page_count(2u32)
        .build()?;

    let comic = director.generate(&brief).await?;

    assert_eq!(comic.path(), &temp_dir.path().join("2_page_comic.png"));
    assert!(comic.path().exists());
    assert_eq!(comic.pages().len(), 2);
    for (i, artifact) in comic.pages().iter().enumerate() {
        assert_eq!(*artifact.page_number(), (i + 1) as u32);
        assert!(artifact.path().exists());
    }

    // Stacked strip: max width, summed height
    let strip = image::open(comic.path())?.to_rgba8();
    assert_eq!((strip.width(), strip.height()), (40, 80));

    // One image turn per page, one session for the whole run
    assert_eq!(images.turn_count(), 2);
    assert_eq!(images.session_count(), 1);

    // Progress is monotonically non-decreasing and finishes at 100
    let events = progress.events();
    let percents: Vec<u8> = events.iter().map(|(p, _)| *p).collect();
    assert!(percents.windows(2).all(|w| w[0] <= w[1]), "{:?}", percents);
    assert_eq!(events.first().map(|(p, _)| *p), Some(10));
    assert_eq!(events.last().map(|(p, _)| *p), Some(100));
    Ok(())
}

#[tokio::test]
async fn test_missing_page_fails_before_any_image_call() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let images = MockImageStudio::new_sequence(vec![]);

    let director = ComicDirector::new(
        MockPlotWriter::new_success(outline_with_pages(2)),
        images.clone(),
        FileSystemPageStore::new(temp_dir.path())?,
    );

    let brief = ComicBrief::builder()
        .theme("Horror")
        .page_count(3u32)
        .build()?;

    let err = director.generate(&brief).await.unwrap_err();
    assert_eq!(studio_kind(err), StudioErrorKind::MissingPage { page: 3 });
    assert_eq!(images.session_count(), 0);
    assert_eq!(images.turn_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_retry_then_success_records_three_attempts() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let images = MockImageStudio::new_sequence(vec![
        MockTurn::Empty,
        MockTurn::Empty,
        MockTurn::Image(png_bytes(30, 40, [0, 255, 0, 255])),
    ]);

    let director = ComicDirector::new(
        MockPlotWriter::new_success(outline_with_pages(1)),
        images.clone(),
        FileSystemPageStore::new(temp_dir.path())?,
    );

    let brief = ComicBrief::builder()
        .theme("Sports drama")
        .page_count(1u32)
        .build()?;

    let comic = director.generate(&brief).await?;
    assert_eq!(comic.pages().len(), 1);
    assert_eq!(images.turn_count(), 3);
    Ok(())
}

#[tokio::test]
async fn test_retry_exhaustion_aborts_run() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileSystemPageStore::new(temp_dir.path())?;
    // Page 1 succeeds; page 2 never yields an image.
    let images = MockImageStudio::new_sequence(vec![
        MockTurn::Image(png_bytes(30, 40, [1, 1, 1, 255])),
        MockTurn::Empty,
        MockTurn::TextOnly("still no image".to_string()),
        MockTurn::Empty,
    ]);

    let director = ComicDirector::new(
        MockPlotWriter::new_success(outline_with_pages(3)),
        images.clone(),
        store,
    );

    let brief = ComicBrief::builder()
        .theme("Space opera")
        .page_count(3u32)
        .build()?;

    let err = director.generate(&brief).await.unwrap_err();
    match studio_kind(err) {
        StudioErrorKind::PageFailed { page, attempts, .. } => {
            assert_eq!(page, 2);
            assert_eq!(attempts, 3);
        }
        other => panic!("unexpected kind: {:?}", other),
    }

    // Page 1 completed before the failure; page 3 was never attempted.
    assert_eq!(images.turn_count(), 4);
    assert!(temp_dir.path().join("page1_image.png").exists());
    assert!(!temp_dir.path().join("page2_image.png").exists());
    assert!(!temp_dir.path().join("page3_image.png").exists());
    assert!(!temp_dir.path().join("3_page_comic.png").exists());
    Ok(())
}

#[tokio::test]
async fn test_unclassified_error_fails_immediately() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let images = MockImageStudio::new_sequence(vec![MockTurn::Error(
        hokusai_error::GeminiErrorKind::HttpError {
            status_code: 503,
            message: "overloaded".to_string(),
        },
    )]);

    let director = ComicDirector::new(
        MockPlotWriter::new_success(outline_with_pages(1)),
        images.clone(),
        FileSystemPageStore::new(temp_dir.path())?,
    );

    let brief = ComicBrief::builder().theme("Noir").page_count(1u32).build()?;

    let err = director.generate(&brief).await.unwrap_err();
    match studio_kind(err) {
        StudioErrorKind::PageFailed { page, attempts, cause } => {
            assert_eq!(page, 1);
            assert_eq!(attempts, 1);
            assert!(cause.contains("503"));
        }
        other => panic!("unexpected kind: {:?}", other),
    }
    assert_eq!(images.turn_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_empty_theme_rejected_before_any_work() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let plot_writer = MockPlotWriter::new_success(outline_with_pages(1));
    let images = MockImageStudio::new_sequence(vec![]);

    let director = ComicDirector::new(
        plot_writer,
        images.clone(),
        FileSystemPageStore::new(temp_dir.path())?,
    );

    let brief = ComicBrief::builder().theme("   ").page_count(1u32).build()?;

    let err = director.generate(&brief).await.unwrap_err();
    assert_eq!(studio_kind(err), StudioErrorKind::EmptyTheme);
    assert_eq!(images.session_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_page_count_out_of_range_is_rejected() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;

    for requested in [0u32, 8] {
        let director = ComicDirector::new(
            MockPlotWriter::new_success(outline_with_pages(1)),
            MockImageStudio::new_sequence(vec![]),
            FileSystemPageStore::new(temp_dir.path())?,
        );
        let brief = ComicBrief::builder()
            .theme("Fantasy")
            .page_count(requested)
            .build()?;

        let err = director.generate(&brief).await.unwrap_err();
        assert_eq!(
            studio_kind(err),
            StudioErrorKind::PageCountOutOfRange { requested }
        );
    }
    Ok(())
}

#[tokio::test]
async fn test_plot_failure_is_fatal_without_image_session() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let images = MockImageStudio::new_sequence(vec![]);

    let director = ComicDirector::new(
        MockPlotWriter::new_failure(),
        images.clone(),
        FileSystemPageStore::new(temp_dir.path())?,
    );

    let brief = ComicBrief::builder().theme("Western").page_count(2u32).build()?;

    let err = director.generate(&brief).await.unwrap_err();
    assert!(matches!(err.kind(), HokusaiErrorKind::Gemini(_)));
    assert_eq!(images.session_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_reference_image_leads_page_one_payload() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let page1_png = png_bytes(20, 30, [5, 5, 5, 255]);
    let images = MockImageStudio::new_sequence(vec![
        MockTurn::Image(page1_png.clone()),
        MockTurn::Image(png_bytes(20, 30, [6, 6, 6, 255])),
    ]);

    let director = ComicDirector::new(
        MockPlotWriter::new_success(outline_with_pages(2)),
        images.clone(),
        FileSystemPageStore::new(temp_dir.path())?,
    );

    let reference = ReferenceImage::new("image/jpeg", vec![0xFF, 0xD8, 0xFF]);
    let brief = ComicBrief::builder()
        .theme("Magical girl")
        .page_count(2u32)
        .reference_image(Some(reference))
        .build()?;

    director.generate(&brief).await?;

    let requests = images.requests();
    assert_eq!(requests.len(), 2);

    // Page 1: reference-usage instruction, reference image, block text
    let first = &requests[0];
    assert_eq!(first.len(), 3);
    match (&first[0], &first[1], &first[2]) {
        (Part::Text(instruction), Part::Image { mime, .. }, Part::Text(block)) => {
            assert!(instruction.starts_with("Use this character design"));
            assert_eq!(mime.as_deref(), Some("image/jpeg"));
            assert!(block.starts_with("[Page 1]"));
        }
        other => panic!("unexpected page-1 payload: {:?}", other),
    }

    // Page 2: block text plus only the immediately preceding page's image
    let second = &requests[1];
    assert_eq!(second.len(), 2);
    match (&second[0], &second[1]) {
        (Part::Text(block), Part::Image { source, .. }) => {
            assert!(block.starts_with("[Page 2]"));
            match source {
                hokusai_core::MediaSource::Binary(data) => assert_eq!(data, &page1_png),
                other => panic!("unexpected source: {:?}", other),
            }
        }
        other => panic!("unexpected page-2 payload: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_page_one_without_reference_sends_block_only() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let images = MockImageStudio::new_sequence(vec![MockTurn::Image(png_bytes(
        20,
        30,
        [7, 7, 7, 255],
    ))]);

    let director = ComicDirector::new(
        MockPlotWriter::new_success(outline_with_pages(1)),
        images.clone(),
        FileSystemPageStore::new(temp_dir.path())?,
    );

    let brief = ComicBrief::builder().theme("Slice of life").page_count(1u32).build()?;
    director.generate(&brief).await?;

    let requests = images.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].len(), 1);
    assert!(matches!(&requests[0][0], Part::Text(block) if block.starts_with("[Page 1]")));
    Ok(())
}
