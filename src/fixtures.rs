//! Sample input files shared by the `--tests` suite and the unit tests.

/// Three valid rows with a tie in division 1.
pub const SCENARIO: &str = "\
firstname,lastname,date,division,points,summary
Ann,Lee,2021-01-01,2,10,ran
Bo,Smith,2021-01-02,1,5,jumped
Cy,Ng,2021-01-03,1,20,swam
";

pub const FIVE_ROWS: &str = "\
firstname,lastname,date,division,points,summary
Amy,Burns,2022-03-01,3,88,Closed out the quarter with a record
Ben,Carter,2022-03-02,1,41,Shipped the billing rewrite
Cara,Diaz,2022-03-03,2,95,Mentored three new hires
Dan,Evans,2022-03-04,1,77,Ran the on-call rotation
Eve,Fox,2022-03-05,2,12,Organised the offsite
";

pub const WRONG_COLUMNS: &str = "\
first,last,date,division,points,summary
Ann,Lee,2021-01-01,2,10,ran
Bo,Smith,2021-01-02,1,5,jumped
";

pub const TWO_ROWS: &str = "\
firstname,lastname,date,division,points,summary
Ann,Lee,2021-01-01,2,10,ran
Bo,Smith,2021-01-02,1,5,jumped
";

pub const NUMERIC_NAMES: &str = "\
firstname,lastname,date,division,points,summary
0.1,Lee,2021-01-01,2,10,ran
1.1,Smith,2021-01-02,1,5,jumped
2.1,Ng,2021-01-03,1,20,swam
";

pub const STRING_POINTS: &str = "\
firstname,lastname,date,division,points,summary
Ann,Lee,2021-01-01,2,ten,ran
Bo,Smith,2021-01-02,1,5,jumped
Cy,Ng,2021-01-03,1,20,swam
";

/// Blank text cells; two complete rows survive.
pub const MISSING_TEXT: &str = "\
firstname,lastname,date,division,points,summary
Ann,Lee,2021-01-01,2,10,ran
Bo,,2021-01-02,1,5,jumped
Cy,Ng,2021-01-03,1,20,swam
Dee,Oh,2021-01-04,3,7,
";

/// Blank division and points cells; one complete row survives.
pub const MISSING_NUMBERS: &str = "\
firstname,lastname,date,division,points,summary
Ann,Lee,2021-01-01,,10,ran
Bo,Smith,2021-01-02,1,,jumped
Cy,Ng,2021-01-03,1,20,swam
";

pub const HEADER_ONLY: &str = "\
firstname,lastname,date,division,points,summary
";

/// Every data row has a blank cell, so nothing survives.
pub const ALL_MISSING: &str = "\
firstname,lastname,date,division,points,summary
Ann,,2021-01-01,2,10,ran
Bo,Smith,2021-01-02,1,,jumped
";

/// A single space in the points column is a value, not a missing cell.
pub const BLANK_POINTS: &str = "\
firstname,lastname,date,division,points,summary
Ann,Lee,2021-01-01,2, ,ran
Bo,Smith,2021-01-02,1,5,jumped
";

/// A named sample and what a run over it should produce.
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub name: &'static str,
    pub content: &'static str,
    pub succeeds: bool,
    /// Report entries expected on success.
    pub entries: usize,
}

impl Fixture {
    pub const fn new(
        name: &'static str,
        content: &'static str,
        succeeds: bool,
        entries: usize,
    ) -> Self {
        Self {
            name,
            content,
            succeeds,
            entries,
        }
    }
}

pub const ALL: [Fixture; 11] = [
    Fixture::new("succeed", SCENARIO, true, 3),
    Fixture::new("five rows", FIVE_ROWS, true, 3),
    Fixture::new("wrong cols", WRONG_COLUMNS, false, 0),
    Fixture::new("two row data", TWO_ROWS, true, 2),
    Fixture::new("numeric names", NUMERIC_NAMES, true, 3),
    Fixture::new("string points", STRING_POINTS, false, 0),
    Fixture::new("blank points", BLANK_POINTS, false, 0),
    Fixture::new("NA values", MISSING_TEXT, true, 2),
    Fixture::new("missing scores & divisions", MISSING_NUMBERS, true, 1),
    Fixture::new("all rows missing", ALL_MISSING, true, 0),
    Fixture::new("header only", HEADER_ONLY, true, 0),
];
