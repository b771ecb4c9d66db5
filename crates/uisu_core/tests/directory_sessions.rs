use pretty_assertions::assert_eq;
use uisu_core::model::club::{Club, ClubCategory};
use uisu_core::model::document::DocumentValidationError;
use uisu_core::service::document_library::LIBRARY_DECADES;
use uisu_core::{
    Catalog, DetailView, DirectorySession, DocumentLibrary, DocumentType, RangeBucket, SortOrder,
    ToolCategory, ToolDirectory, UploadError, UploadRequest,
};

fn upload(title: &str, year: &str, doc_type: Option<DocumentType>) -> UploadRequest {
    UploadRequest {
        title: title.to_string(),
        year: year.to_string(),
        doc_type,
        description: "  Tabled at congress.  ".to_string(),
    }
}

#[test]
fn upload_inserts_new_document_first() {
    let mut library = DocumentLibrary::open();
    let before = library.catalog().len();

    let id = library
        .upload(&upload("  Budget Speech 2025 ", "2025", Some(DocumentType::Speech)), 2024)
        .unwrap()
        .id
        .clone();

    assert_eq!(library.catalog().len(), before + 1);
    let first = library.visible()[0];
    assert_eq!(first.id, id);
    assert_eq!(first.title, "Budget Speech 2025");
    assert_eq!(first.year, 2025);
    assert_eq!(first.doc_type, DocumentType::Speech);
    assert_eq!(first.size, "1.5 MB");
    assert_eq!(first.description, "Tabled at congress.");
}

#[test]
fn upload_defaults_year_and_type() {
    let mut library = DocumentLibrary::open();
    let document = library.upload(&upload("Memo", "someday", None), 2024).unwrap();
    assert_eq!(document.year, 2024);
    assert_eq!(document.doc_type, DocumentType::Report);
}

#[test]
fn upload_requires_title_and_keeps_catalog_unchanged() {
    let mut library = DocumentLibrary::open();
    let err = library.upload(&upload("   ", "1999", None), 2024).unwrap_err();
    assert_eq!(err, UploadError::Validation(DocumentValidationError::EmptyTitle));
    assert_eq!(library.catalog().len(), 12);
}

#[test]
fn upload_keeps_filter_and_selection() {
    let mut library = DocumentLibrary::open();
    library.toggle_type(DocumentType::Constitution);
    assert!(library.select("1"));

    library.upload(&upload("New Bill", "2024", Some(DocumentType::Bill)), 2024).unwrap();

    assert_eq!(library.selection().active_id(), Some("1"));
    assert!(library
        .visible()
        .iter()
        .all(|doc| doc.doc_type == DocumentType::Constitution));
}

#[test]
fn uploaded_documents_follow_decade_filter() {
    let mut library = DocumentLibrary::open();
    library.upload(&upload("Ancient scroll", "1948", None), 2024).unwrap();
    library.set_bucket_label("1940s").unwrap();
    let titles: Vec<&str> = library.visible().iter().map(|doc| doc.title.as_str()).collect();
    assert_eq!(titles, vec!["Ancient scroll"]);

    assert!(library.set_bucket_label("forties").is_err());
    assert_eq!(library.filter().bucket, RangeBucket::Decade(1940));
}

#[test]
fn library_decades_cover_seed_years() {
    let library = DocumentLibrary::open();
    for document in library.catalog() {
        assert!(LIBRARY_DECADES[1..]
            .iter()
            .any(|bucket| bucket.contains(Some(document.year))));
    }
}

#[test]
fn session_lifecycle_resets_state_on_remount() {
    let catalog = Catalog::from_records([
        Club::new("kuti", "Kuti Hall Press", ClubCategory::Press),
        Club::new("ilac", "ILAC Tech Club", ClubCategory::Tech),
    ])
    .unwrap();
    let mut session = DirectorySession::mount(catalog);
    session.set_query("press");
    session.toggle_facet("Press");
    assert!(session.select("kuti"));
    assert_eq!(session.visible().len(), 1);

    let session = DirectorySession::mount(session.unmount());
    assert!(session.filter().is_neutral());
    assert_eq!(session.detail(), DetailView::Empty);
    assert_eq!(session.visible().len(), 2);
    assert!(session.open_detail("unknown").is_not_found());
}

#[test]
fn session_reset_filter_keeps_selection() {
    let catalog = Catalog::from_records([
        Club::new("b", "Bravo", ClubCategory::Sports),
        Club::new("a", "Alpha", ClubCategory::Sports),
    ])
    .unwrap();
    let mut session = DirectorySession::mount(catalog);
    session.set_order(SortOrder::NameAscending);
    session.set_query("zzz");
    session.select("b");
    session.reset_filter();

    let names: Vec<&str> = session.visible().iter().map(|club| club.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Bravo"]);
    assert_eq!(session.selection().active_id(), Some("b"));
    session.clear_facets();
    session.clear_selection();
    assert_eq!(session.detail(), DetailView::Empty);
}

#[test]
fn tool_directory_filters_by_single_category_and_name() {
    let mut tools = ToolDirectory::open();
    assert_eq!(tools.order(), SortOrder::NameAscending);

    tools.set_category(Some(ToolCategory::Health));
    let names: Vec<&str> = tools.visible().iter().map(|tool| tool.name.as_str()).collect();
    assert_eq!(names, vec!["Health (BMI)"]);

    tools.set_category(Some(ToolCategory::Logistics));
    assert!(tools.visible().iter().all(|tool| tool.category == ToolCategory::Logistics));

    tools.set_category(None);
    tools.set_query("CALC");
    let names: Vec<&str> = tools.visible().iter().map(|tool| tool.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Age Calculator",
            "Fin-Aid Calc",
            "GPA Calculator",
            "Perc. Calculator",
            "Sci-Calculator"
        ]
    );

    assert_eq!(tools.toggle_order(), SortOrder::NameDescending);
    assert_eq!(tools.visible()[0].name, "Sci-Calculator");
}

#[test]
fn tool_directory_opens_known_tools_only() {
    let mut tools = ToolDirectory::open();
    assert!(tools.open_tool("pomodoro"));
    assert!(!tools.open_tool("whiteboard"));
    assert_eq!(tools.active_tool().record().map(|tool| tool.id.as_str()), Some("pomodoro"));
    tools.close_tool();
    assert_eq!(tools.active_tool(), DetailView::Empty);
}
