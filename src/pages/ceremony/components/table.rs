use crate::pages::ceremony::roster::Student;
use leptos::*;

#[component]
pub fn StudentTable(students: Signal<Vec<Student>>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border text-sm">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"ID"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Name"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"GPA"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Eligible?"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Invitation Sent"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || students.get()
                        key=|student| (student.id, student.invitation_sent)
                        children=move |student: Student| {
                            view! {
                                <tr class="border-b border-border">
                                    <td class="px-4 py-2 text-fg">{student.id}</td>
                                    <td class="px-4 py-2 text-fg">{student.name.clone()}</td>
                                    <td class="px-4 py-2 text-fg">{format!("{:.2}", student.gpa)}</td>
                                    <td class="px-4 py-2">{if student.is_eligible { "✅" } else { "❌" }}</td>
                                    <td class="px-4 py-2">{if student.invitation_sent { "✅" } else { "-" }}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::ceremony::roster::seed;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_roster_rows_with_formatted_gpa() {
        let html = render_to_string(move || {
            let (students, _) = create_signal(seed());
            view! { <StudentTable students=students.into() /> }
        });
        assert!(html.contains("Ayşe Yıldız"));
        assert!(html.contains("3.75"));
        assert!(html.contains("2.98"));
        assert!(html.contains("❌"));
    }
}
