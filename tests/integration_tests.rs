use std::io::Cursor;

use student_marks::chart::LogChartRenderer;
use student_marks::config::SubjectCatalog;
use student_marks::menu::run_menu;
use student_marks::roster::{InMemoryRoster, RosterStore};
use student_marks::sheet::{build_roster, read_sheet};

fn catalog() -> SubjectCatalog {
    SubjectCatalog::new(vec!["Physics".into(), "Chemistry".into()]).unwrap()
}

fn session(script: &str) -> (InMemoryRoster, String) {
    let mut store = InMemoryRoster::new();
    let mut reader = Cursor::new(script.to_string());
    let mut out = Vec::new();
    run_menu(&mut store, &catalog(), &LogChartRenderer, &mut reader, &mut out)
        .expect("menu session failed");
    (store, String::from_utf8(out).unwrap())
}

const PERFECT: &str = "10\n50\n10\n50\n10\n80\n";
const HALF: &str = "5\n25\n5\n25\n5\n40\n";

#[test]
fn test_full_menu_session() {
    let script = [
        // add two students
        "1\nr1\nAsha\n",
        PERFECT,
        HALF,
        "1\nr2\nBen\n",
        HALF,
        "x\n99\n",
        HALF,
        // view one, view all, class
        "2\nr1\n",
        "3\n",
        "6\n",
        // update r2 to perfect marks, delete r1
        "4\nr2\n",
        PERFECT,
        PERFECT,
        "5\nr1\n",
        "3\n",
        "7\n",
    ]
    .concat();

    let (store, out) = session(&script);

    assert_eq!(store.len(), 1);
    assert!(store.contains("r2"));
    assert_eq!(out.matches("Student added successfully.").count(), 2);
    assert!(out.contains("Invalid input. Please enter a valid number."));
    assert!(out.contains("Invalid input. Score should be between 0 and 10."));
    assert!(out.contains("Details for Asha (Roll: r1):"));
    assert!(out.contains("Overall Percentage (All Subjects): 75.00%"));
    assert!(out.contains("Overall Semester Average: 62.50%"));
    assert!(out.contains("Updating marks for student: Ben"));
    assert!(out.contains("Marks updated successfully."));
    assert!(out.contains("Student record deleted."));
    assert!(out.ends_with("Exiting.\n"));

    // First roster listing ranks Asha (75%) above Ben (50%).
    let first_table = out.find("Total Marks").unwrap();
    let asha = out[first_table..].find("Asha").unwrap();
    let ben = out[first_table..].find("Ben").unwrap();
    assert!(asha < ben);
}

#[test]
fn test_fat_failure_zeroes_subject_in_session() {
    let script = ["1\nr1\nAsha\n", "10\n50\n10\n50\n10\n39\n", PERFECT, "2\nr1\n", "7\n"].concat();
    let (_, out) = session(&script);

    let physics = out.lines().find(|l| l.starts_with("Physics")).unwrap();
    assert!(physics.ends_with("0.00"));
    assert!(out.contains("Overall Percentage (All Subjects): 50.00%"));
    assert!(out.contains("Overall Grade: D"));
}

#[test]
fn test_sheet_and_menu_agree() {
    let sheet = "roll,name,subject,internal1,cat1,internal2,cat2,internal3,fat\n\
                 r1,Asha,Physics,10,50,10,50,10,80\n\
                 r1,Asha,Chemistry,5,25,5,25,5,40\n";
    let mut from_sheet = InMemoryRoster::new();
    build_roster(&mut from_sheet, &catalog(), read_sheet(sheet.as_bytes()).unwrap()).unwrap();

    let (from_menu, _) = session(&["1\nr1\nAsha\n", PERFECT, HALF, "7\n"].concat());

    assert_eq!(from_sheet.get("r1"), from_menu.get("r1"));
}
