//! Static catalog definitions.
//!
//! Plain, fully-specified records; [`super::Component::from_def`] validates
//! them when the catalog is built. Code templates are stored flush-left and
//! inserted verbatim.

/// Fully-specified definition of one catalog component.
pub(crate) struct ComponentDef {
    pub name: &'static str,
    pub description: &'static str,
    pub spec_url: &'static str,
    pub guidelines_url: &'static str,
    pub docs_url: &'static str,
    pub screenshot: &'static str,
    pub imports: &'static [&'static str],
    pub code: &'static str,
    pub code_tip: Option<&'static str>,
    pub custom_code: Option<&'static str>,
    pub custom_code_tip: Option<&'static str>,
}

pub(crate) struct GroupDef {
    pub title: &'static str,
    pub show_in_panel: bool,
    pub components: Vec<ComponentDef>,
}

pub(crate) fn groups() -> Vec<GroupDef> {
    vec![buttons(), fabs(), navigation()]
}

fn buttons() -> GroupDef {
    GroupDef {
        title: "Buttons",
        show_in_panel: true,
        components: vec![
            ComponentDef {
                name: "Elevated Button",
                description: "Elevated buttons are essentially filled tonal buttons with a shadow. \
To prevent shadow creep, only use them when absolutely necessary, \
such as when the button requires visual separation from a patterned background.",
                spec_url: "https://m3.material.io/components/buttons/specs#2a19e853-d5dc-46a2-8ef4-1d954c9dcefa",
                guidelines_url: "https://m3.material.io/components/buttons/guidelines#4e89da4d-a8fa-4e20-bb8d-b8a93eff3e3e",
                docs_url: "https://developer.android.com/reference/kotlin/androidx/compose/material3/package-summary#ElevatedButton(kotlin.Function0,androidx.compose.ui.Modifier,kotlin.Boolean,androidx.compose.ui.graphics.Shape,androidx.compose.material3.ButtonColors,androidx.compose.material3.ButtonElevation,androidx.compose.foundation.BorderStroke,androidx.compose.foundation.layout.PaddingValues,androidx.compose.foundation.interaction.MutableInteractionSource,kotlin.Function1)",
                screenshot: "btn_elevated",
                imports: &["androidx.compose.material3.ElevatedButton"],
                code: r#"ElevatedButton(
    onClick = {
        /* Do something! */
    }
) {
    Text(text = "Text")
}"#,
                code_tip: None,
                custom_code: Some(r#"ElevatedButton(
    onClick = {
        /* Do something! */
    },
    modifier = Modifier,
    enabled = true,
    shape = RoundedCornerShape(12.dp),
    colors = ButtonDefaults.elevatedButtonColors(
        containerColor = MaterialTheme.colorScheme.secondaryContainer,
        contentColor = MaterialTheme.colorScheme.onSecondaryContainer,
        disabledContainerColor = MaterialTheme.colorScheme.tertiaryContainer,
        disabledContentColor = MaterialTheme.colorScheme.onTertiaryContainer
    ),
    elevation = ButtonDefaults.elevatedButtonElevation(),
    contentPadding = PaddingValues(horizontal = 16.dp, vertical = 8.dp)
) {
    Text(text = "Text")
}"#),
                custom_code_tip: None,
            },
            ComponentDef {
                name: "Filled Button",
                description: "Filled buttons have the most visual impact after the FAB, \
and should be used for important, final actions \
that complete a flow, like Save, Join now, or Confirm.",
                spec_url: "https://m3.material.io/components/buttons/specs#0b1b7bd2-3de8-431a-afa1-d692e2e18b0d",
                guidelines_url: "https://m3.material.io/components/buttons/guidelines#9ecffdb3-ef29-47e7-8d5d-f78b404fcafe",
                docs_url: "https://developer.android.com/reference/kotlin/androidx/compose/material3/package-summary#Button(kotlin.Function0,androidx.compose.ui.Modifier,kotlin.Boolean,androidx.compose.ui.graphics.Shape,androidx.compose.material3.ButtonColors,androidx.compose.material3.ButtonElevation,androidx.compose.foundation.BorderStroke,androidx.compose.foundation.layout.PaddingValues,androidx.compose.foundation.interaction.MutableInteractionSource,kotlin.Function1)",
                screenshot: "btn_filled",
                imports: &["androidx.compose.material3.Button"],
                code: r#"Button(
    onClick = {
        /* Do something! */
    }
) {
    Text("Text")
}"#,
                code_tip: None,
                custom_code: Some(r#"Button(
    onClick = {
        /* Do something! */
    },
    modifier = Modifier,
    enabled = true,
    shape = RoundedCornerShape(12.dp),
    colors = ButtonDefaults.buttonColors(
        containerColor = MaterialTheme.colorScheme.primary,
        contentColor = MaterialTheme.colorScheme.onPrimary,
        disabledContainerColor = MaterialTheme.colorScheme.secondaryContainer,
        disabledContentColor = MaterialTheme.colorScheme.onSecondaryContainer
    ),
    contentPadding = PaddingValues(horizontal = 16.dp, vertical = 8.dp)
) {
    Text("Text")
}"#),
                custom_code_tip: None,
            },
            ComponentDef {
                name: "Filled Tonal Button",
                description: "A filled tonal button is an alternative middle ground between filled and outlined buttons. \
They're useful in contexts where a lower-priority button requires slightly more emphasis \
than an outline would give, such as \"Next\" in an onboarding flow. \
Tonal buttons use the secondary color mapping.",
                spec_url: "https://m3.material.io/components/buttons/specs#158f0a18-67fb-4ac4-9d22-cc4d1adc4579",
                guidelines_url: "https://m3.material.io/components/buttons/guidelines#07a1577b-aaf5-4824-a698-03526421058b",
                docs_url: "https://developer.android.com/reference/kotlin/androidx/compose/material3/package-summary#FilledTonalButton(kotlin.Function0,androidx.compose.ui.Modifier,kotlin.Boolean,androidx.compose.ui.graphics.Shape,androidx.compose.material3.ButtonColors,androidx.compose.material3.ButtonElevation,androidx.compose.foundation.BorderStroke,androidx.compose.foundation.layout.PaddingValues,androidx.compose.foundation.interaction.MutableInteractionSource,kotlin.Function1)",
                screenshot: "btn_filled_tonal",
                imports: &["androidx.compose.material3.FilledTonalButton"],
                code: r#"FilledTonalButton(
    onClick = {
        /* Do something! */
    }
) {
    Text("Text")
}"#,
                code_tip: None,
                custom_code: Some(r#"FilledTonalButton(
    onClick = {
        /* Do something! */
    },
    modifier = Modifier,
    enabled = true,
    shape = RoundedCornerShape(12.dp),
    colors = ButtonDefaults.filledTonalButtonColors(
        containerColor = MaterialTheme.colorScheme.secondaryContainer,
        contentColor = MaterialTheme.colorScheme.onSecondaryContainer,
        disabledContainerColor = MaterialTheme.colorScheme.tertiaryContainer,
        disabledContentColor = MaterialTheme.colorScheme.onTertiaryContainer
    ),
    contentPadding = PaddingValues(horizontal = 16.dp, vertical = 8.dp)
) {
    Text("Text")
}"#),
                custom_code_tip: None,
            },
            ComponentDef {
                name: "Outlined Button",
                description: "Outlined buttons are medium-emphasis buttons. They contain actions that are important, \
but aren't the primary action in an app.\n\n\
Outlined buttons pair well with filled buttons to indicate an alternative, secondary action.",
                spec_url: "https://m3.material.io/components/buttons/specs#de72d8b1-ba16-4cd7-989e-e2ad3293cf63",
                guidelines_url: "https://m3.material.io/components/buttons/guidelines#3742b09f-c224-43e0-a83e-541bd29d0f05",
                docs_url: "https://developer.android.com/reference/kotlin/androidx/compose/material3/package-summary#OutlinedButton(kotlin.Function0,androidx.compose.ui.Modifier,kotlin.Boolean,androidx.compose.ui.graphics.Shape,androidx.compose.material3.ButtonColors,androidx.compose.material3.ButtonElevation,androidx.compose.foundation.BorderStroke,androidx.compose.foundation.layout.PaddingValues,androidx.compose.foundation.interaction.MutableInteractionSource,kotlin.Function1)",
                screenshot: "btn_outlined",
                imports: &["androidx.compose.material3.OutlinedButton"],
                code: r#"OutlinedButton(
    onClick = {
        /* Do something! */
    }
) {
    Text("Text")
}"#,
                code_tip: None,
                custom_code: Some(r#"OutlinedButton(
    onClick = {
        /* Do something! */
    },
    modifier = Modifier,
    enabled = true,
    shape = RoundedCornerShape(12.dp),
    colors = ButtonDefaults.outlinedButtonColors(
        containerColor = MaterialTheme.colorScheme.secondaryContainer,
        contentColor = MaterialTheme.colorScheme.onSecondaryContainer,
        disabledContainerColor = MaterialTheme.colorScheme.tertiaryContainer,
        disabledContentColor = MaterialTheme.colorScheme.onTertiaryContainer
    ),
    border = BorderStroke(1.dp, MaterialTheme.colorScheme.secondary),
    contentPadding = PaddingValues(horizontal = 16.dp, vertical = 8.dp)
) {
    Text("Text")
}"#),
                custom_code_tip: None,
            },
            ComponentDef {
                name: "Text Button",
                description: "Text buttons are used for the lowest priority actions, especially when presenting multiple options.\n\n\
Text buttons can be placed on a variety of backgrounds. \
Until the button is interacted with, its container isn't visible.",
                spec_url: "https://m3.material.io/components/buttons/specs#899b9107-0127-4a01-8f4c-87f19323a1b4",
                guidelines_url: "https://m3.material.io/components/buttons/guidelines#c9bcbc0b-ee05-45ad-8e80-e814ae919fbb",
                docs_url: "https://developer.android.com/reference/kotlin/androidx/compose/material3/package-summary#TextButton(kotlin.Function0,androidx.compose.ui.Modifier,kotlin.Boolean,androidx.compose.ui.graphics.Shape,androidx.compose.material3.ButtonColors,androidx.compose.material3.ButtonElevation,androidx.compose.foundation.BorderStroke,androidx.compose.foundation.layout.PaddingValues,androidx.compose.foundation.interaction.MutableInteractionSource,kotlin.Function1)",
                screenshot: "btn_text",
                imports: &["androidx.compose.material3.TextButton"],
                code: r#"TextButton(
    onClick = {
        /* Do something! */
    }
) {
    Text("Text")
}"#,
                code_tip: None,
                custom_code: Some(r#"TextButton(
    onClick = {
        /* Do something! */
    },
    modifier = Modifier,
    enabled = true,
    shape = RoundedCornerShape(12.dp),
    colors = ButtonDefaults.textButtonColors(),
    contentPadding = PaddingValues(horizontal = 16.dp, vertical = 8.dp)
) {
    Text("Text")
}"#),
                custom_code_tip: None,
            },
        ],
    }
}

fn fabs() -> GroupDef {
    GroupDef {
        title: "Floating Action Buttons",
        show_in_panel: true,
        components: vec![
            ComponentDef {
                name: "Floating Action Button",
                description: "Use a FAB to represent the screen's primary action.",
                spec_url: "https://m3.material.io/components/floating-action-button/specs#71504201-7bd1-423d-8bb7-07e0291743e5",
                guidelines_url: "https://m3.material.io/components/floating-action-button/guidelines#dbfbab5d-c3e2-47a4-be6e-c566e9125443",
                docs_url: "https://developer.android.com/reference/kotlin/androidx/compose/material3/package-summary#FloatingActionButton(kotlin.Function0,androidx.compose.ui.Modifier,androidx.compose.ui.graphics.Shape,androidx.compose.ui.graphics.Color,androidx.compose.ui.graphics.Color,androidx.compose.material3.FloatingActionButtonElevation,androidx.compose.foundation.interaction.MutableInteractionSource,kotlin.Function0)",
                screenshot: "fab",
                imports: &["androidx.compose.material3.FloatingActionButton"],
                code: r#"FloatingActionButton(
    onClick = {
        /* Do something! */
    }
) {
    Icon(
        imageVector = Icons.Default.Create,
        contentDescription = "Create"
    )
}"#,
                code_tip: None,
                custom_code: Some(r#"FloatingActionButton(
    onClick = {
        /* Do something! */
    },
    modifier = Modifier,
    shape = FloatingActionButtonDefaults.shape,
    containerColor = FloatingActionButtonDefaults.containerColor,
    contentColor = contentColorFor(FloatingActionButtonDefaults.containerColor),
    elevation = FloatingActionButtonDefaults.elevation(4.dp)
) {
    Icon(
        imageVector = Icons.Default.Create,
        contentDescription = "Create"
    )
}"#),
                custom_code_tip: None,
            },
            ComponentDef {
                name: "Extended Floating Action Button",
                description: "Use an extended FAB on screens with long, scrolling content where the action needs a label \
to be understood at a glance.",
                spec_url: "https://m3.material.io/components/extended-fab/specs",
                guidelines_url: "https://m3.material.io/components/extended-fab/guidelines",
                docs_url: "https://developer.android.com/reference/kotlin/androidx/compose/material3/package-summary#ExtendedFloatingActionButton(kotlin.Function0,kotlin.Function0,androidx.compose.ui.Modifier,kotlin.Boolean,androidx.compose.ui.graphics.Shape,androidx.compose.ui.graphics.Color,androidx.compose.ui.graphics.Color,androidx.compose.material3.FloatingActionButtonElevation,androidx.compose.foundation.interaction.MutableInteractionSource)",
                screenshot: "fab_extended",
                imports: &["androidx.compose.material3.ExtendedFloatingActionButton"],
                code: r#"ExtendedFloatingActionButton(
    text = {
        Text("Create")
    },
    icon = {
        Icon(
            imageVector = Icons.Default.Create,
            contentDescription = "Create"
        )
    },
    onClick = {
        /* Do something! */
    }
)"#,
                code_tip: None,
                custom_code: None,
                custom_code_tip: None,
            },
        ],
    }
}

fn navigation() -> GroupDef {
    GroupDef {
        title: "Navigation",
        // Surfaces only in the quick-insert picker, not the side panel.
        show_in_panel: false,
        components: vec![ComponentDef {
            name: "Navigation Bar",
            description: "Navigation bars offer a persistent and convenient way to switch between \
primary destinations in an app.",
            spec_url: "https://m3.material.io/components/navigation-bar/specs",
            guidelines_url: "https://m3.material.io/components/navigation-bar/guidelines",
            docs_url: "https://developer.android.com/reference/kotlin/androidx/compose/material3/package-summary#NavigationBar(androidx.compose.ui.Modifier,androidx.compose.ui.graphics.Color,androidx.compose.ui.graphics.Color,androidx.compose.ui.unit.Dp,androidx.compose.foundation.layout.WindowInsets,kotlin.Function1)",
            screenshot: "navigation_bar",
            imports: &[
                "androidx.compose.material3.NavigationBar",
                "androidx.compose.material3.NavigationBarItem",
            ],
            code: r#"NavigationBar {
    NavigationBarItem(
        selected = true,
        onClick = {
            /* Do something! */
        },
        icon = {
            Icon(
                imageVector = Icons.Default.Home,
                contentDescription = "Home"
            )
        },
        label = {
            Text("Home")
        }
    )
}"#,
            code_tip: Some("Add one NavigationBarItem per destination."),
            custom_code: None,
            custom_code_tip: None,
        }],
    }
}
