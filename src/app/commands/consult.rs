//! Interactive consultation capture.
//!
//! Walks every form field with a picker or text input. Cancelling any step
//! (Esc or Ctrl-C) abandons the consultation without an error.

use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input, Select};

use crate::domain::selection::{
    CheekboneType, FaceShape, ForeheadType, HairStyle, JawType, NeckLength, NeckThickness,
    Selection, ShoulderShape,
};
use crate::domain::{AppError, Consultation};

pub fn execute() -> Result<Option<Consultation>, AppError> {
    let Some(customer_name) = prompt_text("Customer name", "")? else {
        return Ok(None);
    };
    let Some(customer_phone) = prompt_text("Contact number", "")? else {
        return Ok(None);
    };
    let Some(designer) = prompt_text("Designer name", "")? else {
        return Ok(None);
    };

    let Some(face) = prompt_selection::<FaceShape>()? else {
        return Ok(None);
    };
    let Some(forehead) = prompt_selection::<ForeheadType>()? else {
        return Ok(None);
    };
    let Some(cheekbone) = prompt_selection::<CheekboneType>()? else {
        return Ok(None);
    };
    let Some(jaw) = prompt_selection::<JawType>()? else {
        return Ok(None);
    };
    let Some(neck_length) = prompt_selection::<NeckLength>()? else {
        return Ok(None);
    };
    let Some(neck_thickness) = prompt_selection::<NeckThickness>()? else {
        return Ok(None);
    };
    let Some(shoulder) = prompt_selection::<ShoulderShape>()? else {
        return Ok(None);
    };
    let Some(style) = prompt_selection::<HairStyle>()? else {
        return Ok(None);
    };

    Ok(Some(Consultation {
        customer_name,
        customer_phone,
        designer,
        date: chrono::Local::now().date_naive(),
        face,
        forehead,
        cheekbone,
        jaw,
        neck_length,
        neck_thickness,
        shoulder,
        style,
    }))
}

fn prompt_selection<T: Selection>() -> Result<Option<T>, AppError> {
    let items: Vec<&'static str> = T::ALL.iter().map(|v| v.as_str()).collect();
    let selection = Select::new()
        .with_prompt(T::LABEL)
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| {
            AppError::Configuration(format!("Failed to select {}: {}", T::FIELD, err))
        })?;

    Ok(selection.map(|index| T::ALL[index]))
}

fn prompt_text(label: &str, default: &str) -> Result<Option<String>, AppError> {
    match Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .default(default.to_string())
        .interact_text()
    {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Configuration(format!("Failed to read {}: {}", label, err))),
    }
}
