use pad::PadStr;

/// Plain ASCII table writer for terminal listings.
pub struct Table {
    titles: Vec<&'static str>,
    rows: Vec<Vec<String>>,
    headless: bool,
}

impl Table {
    pub fn new(titles: Vec<&'static str>, headless: bool) -> Self {
        Self {
            titles,
            rows: Vec::new(),
            headless,
        }
    }

    pub fn add(&mut self, row: Vec<String>) {
        assert_eq!(row.len(), self.titles.len(), "unexpected row len");
        self.rows.push(row);
    }

    pub fn show(self) {
        let widths = self.widths();

        let mut split = String::from("+");
        for width in widths.iter() {
            for _ in 0..width + 2 {
                split.push('-');
            }
            split.push('+');
        }

        println!("{split}");
        if !self.headless {
            println!("{}", Self::render_row(&self.title_row(), &widths));
            println!("{split}");
        }
        for row in self.rows.iter() {
            println!("{}", Self::render_row(row, &widths));
        }
        println!("{split}");
    }

    fn title_row(&self) -> Vec<String> {
        self.titles.iter().map(|t| t.to_string()).collect()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = if self.headless {
            vec![0; self.titles.len()]
        } else {
            self.titles
                .iter()
                .map(|t| console::measure_text_width(t))
                .collect()
        };
        for row in self.rows.iter() {
            for (coli, cell) in row.iter().enumerate() {
                let size = console::measure_text_width(cell);
                if size > widths[coli] {
                    widths[coli] = size;
                }
            }
        }
        widths
    }

    fn render_row(row: &[String], widths: &[usize]) -> String {
        let mut line = String::from("|");
        for (cell, width) in row.iter().zip(widths.iter()) {
            line.push(' ');
            line.push_str(&cell.pad_to_width(*width));
            line.push_str(" |");
        }
        line
    }
}
