//! Rewriting a font binary according to a patch plan.

use anyhow::{Context, Result};
use noto_font_ops::{NAME_ID_VERSION, map_name_records, rewrite_font};
use read_fonts::TableProvider;
use write_fonts::{
    from_obj::ToOwnedTable,
    tables::{head::Head, hhea::Hhea, os2::Os2},
    types::{FWord, Fixed},
};

use crate::plan::{FontField, PatchPlan};

/// Apply a plan to font data, returning the rewritten binary.
///
/// Untouched tables are carried over byte for byte. An empty plan still
/// round-trips the font through the builder.
pub fn apply_plan(data: &[u8], plan: &PatchPlan) -> Result<Vec<u8>> {
    rewrite_font(data, |font, builder| {
        if let Some(text) = plan.text(FontField::Revision) {
            let revision: f64 =
                text.parse().with_context(|| format!("bad revision text {text:?}"))?;
            let mut head: Head = font.head()?.to_owned_table();
            head.font_revision = Fixed::from_f64(revision);
            builder.add_table(&head)?;
        }

        if let Some(text) = plan.text(FontField::VersionString) {
            let name = map_name_records(font, |name_id, _| {
                (name_id == NAME_ID_VERSION).then(|| text.to_string())
            })?;
            builder.add_table(&name)?;
        }

        let ascent = plan.num(FontField::Ascent);
        let descent = plan.num(FontField::Descent);
        if ascent.is_some() || descent.is_some() {
            let mut hhea: Hhea = font.hhea()?.to_owned_table();
            if let Some(v) = ascent {
                hhea.ascender = FWord::new(v as i16);
            }
            if let Some(v) = descent {
                hhea.descender = FWord::new(v as i16);
            }
            builder.add_table(&hhea)?;
        }

        let typo_ascender = plan.num(FontField::TypoAscender);
        let win_ascent = plan.num(FontField::WinAscent);
        let typo_descender = plan.num(FontField::TypoDescender);
        let win_descent = plan.num(FontField::WinDescent);
        if [typo_ascender, win_ascent, typo_descender, win_descent].iter().any(Option::is_some) {
            let mut os2: Os2 = font.os2()?.to_owned_table();
            if let Some(v) = typo_ascender {
                os2.s_typo_ascender = v as i16;
            }
            if let Some(v) = win_ascent {
                os2.us_win_ascent = v as u16;
            }
            if let Some(v) = typo_descender {
                os2.s_typo_descender = v as i16;
            }
            if let Some(v) = win_descent {
                os2.us_win_descent = v as u16;
            }
            builder.add_table(&os2)?;
        }

        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use noto_font_version::Version;
    use read_fonts::FontRef;
    use write_fonts::{
        FontBuilder,
        tables::{
            maxp::Maxp,
            name::{Name, NameRecord},
            os2::SelectionFlags,
        },
        types::{LongDateTime, NameId, Tag, UfWord},
    };

    use super::*;
    use crate::{plan::plan_patches, view::FontView};

    const INFO: &str = "GOOG;noto-fonts:20170220:a8a215d2e889";

    fn make_test_font(revision: f64, version_string: &str, ascent: i16, descent: i16) -> Vec<u8> {
        let head = Head {
            font_revision: Fixed::from_f64(revision),
            checksum_adjustment: 0,
            magic_number: 0x5F0F3CF5,
            flags: write_fonts::tables::head::Flags::empty(),
            units_per_em: 2048,
            created: LongDateTime::new(0),
            modified: LongDateTime::new(0),
            x_min: 0,
            y_min: descent,
            x_max: 1000,
            y_max: ascent,
            mac_style: write_fonts::tables::head::MacStyle::empty(),
            lowest_rec_ppem: 8,
            font_direction_hint: 2,
            index_to_loc_format: 0,
        };

        let hhea = Hhea {
            ascender: FWord::new(ascent),
            descender: FWord::new(descent),
            line_gap: FWord::new(0),
            advance_width_max: UfWord::new(1000),
            min_left_side_bearing: FWord::new(0),
            min_right_side_bearing: FWord::new(0),
            x_max_extent: FWord::new(1000),
            caret_slope_rise: 1,
            caret_slope_run: 0,
            caret_offset: 0,
            number_of_h_metrics: 0,
        };

        let os2 = Os2 {
            x_avg_char_width: 500,
            us_weight_class: 400,
            us_width_class: 5,
            fs_type: 0,
            y_subscript_x_size: 650,
            y_subscript_y_size: 600,
            y_subscript_x_offset: 0,
            y_subscript_y_offset: 75,
            y_superscript_x_size: 650,
            y_superscript_y_size: 600,
            y_superscript_x_offset: 0,
            y_superscript_y_offset: 350,
            y_strikeout_size: 50,
            y_strikeout_position: 300,
            s_family_class: 0,
            panose_10: [0; 10],
            ul_unicode_range_1: 0,
            ul_unicode_range_2: 0,
            ul_unicode_range_3: 0,
            ul_unicode_range_4: 0,
            ach_vend_id: Tag::new(b"GOOG"),
            fs_selection: SelectionFlags::REGULAR,
            us_first_char_index: 0x20,
            us_last_char_index: 0x7E,
            s_typo_ascender: ascent,
            s_typo_descender: descent,
            s_typo_line_gap: 0,
            us_win_ascent: ascent as u16,
            us_win_descent: descent.unsigned_abs(),
            ul_code_page_range_1: Some(0),
            ul_code_page_range_2: Some(0),
            sx_height: Some(1000),
            s_cap_height: Some(1400),
            us_default_char: Some(0),
            us_break_char: Some(0x20),
            us_max_context: Some(0),
            us_lower_optical_point_size: None,
            us_upper_optical_point_size: None,
        };

        let maxp = Maxp {
            num_glyphs: 1,
            max_points: Some(0),
            max_contours: Some(0),
            max_composite_points: Some(0),
            max_composite_contours: Some(0),
            max_zones: Some(1),
            max_twilight_points: Some(0),
            max_storage: Some(0),
            max_function_defs: Some(0),
            max_instruction_defs: Some(0),
            max_stack_elements: Some(0),
            max_size_of_instructions: Some(0),
            max_component_elements: Some(0),
            max_component_depth: Some(0),
        };

        let name = Name::new(vec![NameRecord::new(
            3,
            1,
            0x409,
            NameId::new(NAME_ID_VERSION),
            version_string.to_string().into(),
        )]);

        let mut builder = FontBuilder::new();
        builder.add_table(&head).unwrap();
        builder.add_table(&hhea).unwrap();
        builder.add_table(&os2).unwrap();
        builder.add_table(&maxp).unwrap();
        builder.add_table(&name).unwrap();
        builder.build()
    }

    #[test]
    fn test_apply_full_plan() {
        let data = make_test_font(1.23, &format!("Version 1.23;{INFO}"), 2162, -554);
        let font = FontRef::new(&data).unwrap();
        let view = FontView::from_font(&font).unwrap();
        assert_eq!(view.revision, "1.230");

        let plan = plan_patches(&view, Version::new(2, 40), INFO, true).unwrap();
        let fixed = apply_plan(&data, &plan).unwrap();

        let font = FontRef::new(&fixed).unwrap();
        let view = FontView::from_font(&font).unwrap();
        assert_eq!(view.revision, "2.040");
        assert_eq!(view.version_string.as_deref(), Some(&*format!("Version 2.040;{INFO}")));
        let metrics = view.metrics.unwrap();
        assert_eq!(metrics.ascent, 2163);
        assert_eq!(metrics.descent, -555);
        assert_eq!(metrics.typo_ascender, 2163);
        assert_eq!(metrics.typo_descender, -555);
        assert_eq!(metrics.win_ascent, 2163);
        assert_eq!(metrics.win_descent, 555);

        // fixed font now plans clean
        let plan = plan_patches(&view, Version::new(2, 40), INFO, true).unwrap();
        assert!(plan.is_empty(), "{plan:?}");
    }

    #[test]
    fn test_apply_empty_plan_preserves_fields() {
        let data = make_test_font(2.04, &format!("Version 2.040;{INFO}"), 2163, -555);
        let out = apply_plan(&data, &PatchPlan::default()).unwrap();
        let font = FontRef::new(&out).unwrap();
        let view = FontView::from_font(&font).unwrap();
        assert_eq!(view.revision, "2.040");
        assert_eq!(view.metrics.unwrap().ascent, 2163);
    }
}
