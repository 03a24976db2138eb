use crate::shared::export::open_export;
use contracts::shared::ExportFormat;
use leptos::prelude::*;
use thaw::*;

/// Кнопки экспорта CSV / Excel.
///
/// `build_url` получает формат и возвращает готовый URL с текущими фильтрами.
#[component]
pub fn ExportButton(
    build_url: Callback<ExportFormat, String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let export = move |format: ExportFormat| {
        let url = build_url.run(format);
        if let Err(e) = open_export(&url) {
            log::error!("Failed to export {}: {}", format, e);
        }
    };

    view! {
        <Flex gap=FlexGap::Small>
            {[ExportFormat::Csv, ExportFormat::Xlsx].into_iter().map(|format| {
                view! {
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| export(format)
                        disabled=disabled
                    >
                        {format!("Export {}", format.label())}
                    </Button>
                }
            }).collect_view()}
        </Flex>
    }
}
