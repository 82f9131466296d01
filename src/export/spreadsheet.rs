use crate::error::Result;
use crate::store::Assessment;
use crate::types::schema::Program;
use std::io::Write;

pub const QUESTION_HEADER: [&str; 7] = [
    "Categoria",
    "Pergunta",
    "Nota",
    "Melhorar?",
    "Providência",
    "Data",
    "Responsável",
];

/// Writes the project block followed by one results block per program.
///
/// Sections are separated by empty lines. Fields holding a comma, quote or
/// line break are quoted by the csv writer; everything else is written bare.
pub fn write_csv<W: Write>(assessment: &Assessment, mut out: W) -> Result<()> {
    let project = &assessment.project;
    section(&mut out, |wtr| {
        wtr.write_record(["Informações do Projeto"])?;
        wtr.write_record(["Nome", project.name.as_str()])?;
        wtr.write_record(["Cliente", project.client.as_str()])?;
        wtr.write_record(["Setor", project.sector.as_str()])?;
        wtr.write_record(["País Parceiro", project.country.as_str()])?;
        Ok(())
    })?;

    for program in Program::ALL {
        let view = assessment.program(program);
        let scores = view.scores();

        out.write_all(b"\n")?;
        section(&mut out, |wtr| {
            wtr.write_record([format!("RESULTADOS {program}")])?;
            wtr.write_record([
                "Pontuação Total".to_string(),
                format!("{:.1}%", scores.percentage),
            ])?;
            wtr.write_record(["Classificação", scores.classification.label()])?;
            Ok(())
        })?;

        out.write_all(b"\n")?;
        section(&mut out, |wtr| {
            wtr.write_record([format!("Avaliação {program}")])?;
            wtr.write_record(QUESTION_HEADER)?;
            for category in view.categories {
                for question in category.questions {
                    let answer = view.state.answer(question.id);
                    let score = answer.score.to_string();
                    wtr.write_record([
                        category.name,
                        question.text,
                        score.as_str(),
                        if answer.can_improve { "Sim" } else { "Não" },
                        answer.action.as_str(),
                        answer.date.as_str(),
                        answer.owner.as_str(),
                    ])?;
                }
            }
            Ok(())
        })?;
    }

    out.flush()?;
    Ok(())
}

/// Runs `write` against a fresh csv writer; an empty csv record renders as
/// `""`, so blank separator lines go straight to `out` between sections.
fn section<W, F>(out: &mut W, write: F) -> Result<()>
where
    W: Write,
    F: FnOnce(&mut csv::Writer<&mut W>) -> Result<()>,
{
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);
    write(&mut wtr)?;
    wtr.flush()?;
    Ok(())
}
