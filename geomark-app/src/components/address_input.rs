use leptos::*;

#[component]
pub fn AddressInput<F>(
    address: Signal<String>,
    on_input: Callback<String>,
    on_submit: F,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView
where
    F: Fn() + Copy + 'static,
{
    view! {
      <div class="flex items-center mb-4">
        <input
          type="text"
          class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-1 focus:ring-blue-500"
          prop:value = move || address.get()
          on:input = move |ev| {
            on_input.call(event_target_value(&ev));
          }
          on:keyup = move |ev| {
            if ev.key() == "Enter" {
              ev.stop_propagation();
              on_submit();
            }
          }
        />
        <button
          type="button"
          class="ml-2 px-3 py-2 bg-blue-500 text-white rounded-md hover:bg-blue-700 focus:outline-none focus:ring-1 focus:ring-blue-500"
          prop:disabled = move || disabled.get()
          on:click = move |_| on_submit()
        >
          "Geocode"
        </button>
      </div>
    }
}
